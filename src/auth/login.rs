use crate::Result;
use crate::component::alert::{unwrap_or_alert, unwrap_without_alert};
use crate::component::form::add_enter_listener_on_form;
use crate::utils::{
    add_class, get_document, get_element_by_id, get_element_by_id_dyn, navigate_to, remove_class,
};
use crate::{json, storage, web};
use dto::auth::LoginResponse;
use dto::credentials::LoginRequest;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

const INPUT_DEFAULT_CLASS: &str = "input-default";
const INPUT_ERROR_CLASS: &str = "input-error";
const SHAKE_CLASS: &str = "animate-shake";

pub fn init_login_page(document: &Document) {
    add_enter_listener_on_form(document, "login-form");
    add_input_clearing_listeners(document);
}

/// Typing in either field resets the error presentation.
fn add_input_clearing_listeners(document: &Document) {
    let closure = Closure::wrap(Box::new(|event: Event| {
        unwrap_or_alert(clear_error_state(&event));
    }) as Box<dyn Fn(_)>);
    for id in ["email", "password"] {
        let input = unwrap_or_alert(get_element_by_id(document, id));
        input
            .add_event_listener_with_event_listener("input", closure.as_ref().unchecked_ref())
            .unwrap();
    }
    closure.forget();
}

fn clear_error_state(event: &Event) -> Result<()> {
    let document = get_document()?;
    if let Some(target) = event.target() {
        if let Ok(input) = target.dyn_into::<HtmlInputElement>() {
            remove_class(&input, INPUT_ERROR_CLASS)?;
            add_class(&input, INPUT_DEFAULT_CLASS)?;
        }
    }
    if let Ok(error_element) = get_element_by_id(&document, "login-error") {
        add_class(&error_element, "hidden")?;
    }

    Ok(())
}

/// Validate the fields, then try to log in. Success stores the session and
/// moves to the dashboard; rejection keeps the user here with the inline
/// error state.
#[wasm_bindgen]
pub async fn login() {
    let document = unwrap_without_alert(get_document());
    let email_field =
        unwrap_or_alert(get_element_by_id_dyn::<HtmlInputElement>(&document, "email"));
    let password_field =
        unwrap_or_alert(get_element_by_id_dyn::<HtmlInputElement>(&document, "password"));

    if !email_field.report_validity() || !password_field.report_validity() {
        return;
    }
    let email = email_field.value();
    let password = password_field.value();
    if email.is_empty() || password.is_empty() {
        return;
    }

    let login_button =
        unwrap_or_alert(get_element_by_id_dyn::<HtmlButtonElement>(&document, "login-button"));
    login_button.set_disabled(true);
    let result = post_credentials(&email, &password).await;
    login_button.set_disabled(false);

    match result {
        Ok(response) => match response.data() {
            Some(data) if *response.success() => {
                unwrap_or_alert(storage::store_session(data.token(), &data.primary_role()));
                unwrap_or_alert(navigate_to("/dashboard"));
            }
            _ => {
                password_field.set_value("");
                let message = response
                    .message()
                    .clone()
                    .unwrap_or_else(|| "Invalid credentials".to_owned());
                unwrap_or_alert(show_login_error(&document, &message));
            }
        },
        Err(error) => {
            password_field.set_value("");
            log::error!("{error:?}");
            unwrap_or_alert(show_login_error(&document, "Cannot connect to server"));
        }
    }
}

/// Login happens before any credential exists, so this bypasses the bearer
/// api client on purpose.
async fn post_credentials(email: &str, password: &str) -> Result<LoginResponse> {
    let body = json::to_string(&LoginRequest::new(email.to_owned(), password.to_owned()))?;
    let response = web::fetch(
        "/api/auth/login",
        "post",
        Some("application/json"),
        None,
        Some(&body),
    )
    .await?;
    // Rejections carry the same body shape with `success: false`.
    json::from_str(&response.body().clone().unwrap_or_default())
}

fn show_login_error(document: &Document, message: &str) -> Result<()> {
    let error_element = get_element_by_id(document, "login-error")?;
    error_element.set_text_content(Some(message));
    remove_class(&error_element, "hidden")?;
    for id in ["email", "password"] {
        let input = get_element_by_id(document, id)?;
        remove_class(&input, INPUT_DEFAULT_CLASS)?;
        add_class(&input, INPUT_ERROR_CLASS)?;
    }
    shake_card(document)
}

fn shake_card(document: &Document) -> Result<()> {
    let card = get_element_by_id(document, "login-card")?;
    remove_class(&card, SHAKE_CLASS)?;
    // Reading the offset forces a reflow so the animation restarts.
    let _ = card.dyn_ref::<HtmlElement>().map(HtmlElement::offset_width);
    add_class(&card, SHAKE_CLASS)
}
