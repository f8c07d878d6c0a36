use crate::component::alert::unwrap_without_alert;
use crate::utils::get_document;
use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod auth;
mod component;
mod enrollment;
mod error;
mod json;
mod storage;
mod template;
mod user_interface;
mod utils;
mod web;

pub type Result<T> = core::result::Result<T, error::Error>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());

    let document = unwrap_without_alert(get_document());
    component::navbar::init_navbar(&document);
    auth::init_auth_pages(&document);
    enrollment::init_enrollment_page(&document);
}
