use crate::Result;
use crate::utils::get_window;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
#[derive(PartialEq)]
pub enum AlertLevel {
    Info = 0,
    Error = 1,
}

/// Surface a message through the blocking browser dialog. Errors are also
/// logged so they land in the console next to their technical context.
pub fn create_alert(text: &str, level: AlertLevel) {
    if level == AlertLevel::Error {
        log::error!("{text}");
    }
    match get_window() {
        Ok(window) => {
            if let Err(error) = window.alert_with_message(text) {
                log::error!("Can't display alert: {error:?}");
            }
        }
        Err(error) => log::error!("Can't display alert: {error:?}"),
    }
}

pub fn unwrap_or_alert<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|error| {
        create_alert(&error.to_string(), AlertLevel::Error);
        panic!("{error:?}");
    })
}

pub fn unwrap_without_alert<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|error| panic!("{error:?}"))
}
