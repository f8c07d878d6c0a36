use crate::utils::get_element_by_id;
use web_sys::Document;

pub mod change_password;
pub mod login;

pub fn init_auth_pages(document: &Document) {
    if get_element_by_id(document, "login-form").is_ok() {
        login::init_login_page(document);
    }
    if get_element_by_id(document, "change-password-form").is_ok() {
        change_password::init_change_password_page(document);
    }
}
