use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use serde::{de, ser};

pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ser::Serialize + ?Sized,
{
    serde_json_wasm::to_string(value).map_err(|error| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("Can't serialize body: {error}"),
        )
    })
}

pub fn from_str<T>(s: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    serde_json_wasm::from_str(s).map_err(|error| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("Can't deserialize body: {error}"),
        )
    })
}
