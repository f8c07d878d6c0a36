use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use crate::utils::get_window;
use web_sys::Storage;

const TOKEN_KEY: &str = "jwt_token";
const ROLE_KEY: &str = "user_role";

fn local_storage() -> Result<Storage> {
    get_window()?
        .local_storage()?
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "local storage is not available"))
}

pub fn get_token() -> Result<Option<String>> {
    Ok(local_storage()?.get_item(TOKEN_KEY)?)
}

pub fn store_session(token: &str, role: &str) -> Result<()> {
    let storage = local_storage()?;
    storage.set_item(TOKEN_KEY, token)?;
    storage.set_item(ROLE_KEY, role)?;
    Ok(())
}

pub fn clear_session() -> Result<()> {
    let storage = local_storage()?;
    storage.remove_item(TOKEN_KEY)?;
    storage.remove_item(ROLE_KEY)?;
    Ok(())
}
