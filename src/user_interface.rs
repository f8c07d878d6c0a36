use crate::Result;
use crate::component::alert::{AlertLevel, create_alert, unwrap_or_alert};
use crate::utils::{add_class, get_body, remove_class};

pub fn set_loading(loading: bool) -> Result<()> {
    if loading {
        add_class(&get_body()?.into(), "loading")
    } else {
        remove_class(&get_body()?.into(), "loading")
    }
}

/// Run a page action with the loading state toggled around it, surfacing any
/// error through the alert dialog once, at this outermost layer.
/// Unauthenticated errors stay silent: the api client is already redirecting
/// to the login page.
pub async fn with_loading(action: impl AsyncFnOnce() -> Result<()>) {
    unwrap_or_alert(set_loading(true));
    let result = action().await;
    unwrap_or_alert(set_loading(false));
    if let Err(error) = result {
        if error.is_unauthenticated() {
            log::warn!("{error:?}");
        } else {
            log::error!("{error:?}");
            create_alert(&error.to_string(), AlertLevel::Error);
        }
    }
}
