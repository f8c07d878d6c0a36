use crate::Result;
use crate::component::alert::{AlertLevel, create_alert, unwrap_or_alert, unwrap_without_alert};
use crate::component::form::add_enter_listener_on_form;
use crate::user_interface::with_loading;
use crate::utils::{
    add_class, get_document, get_element_by_id, get_element_by_id_dyn, remove_class,
};
use crate::{api, json};
use dto::api_message::ApiMessage;
use dto::change_password::ChangePasswordRequest;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

pub fn init_change_password_page(document: &Document) {
    add_enter_listener_on_form(document, "change-password-form");
    for (input_id, button_id) in [
        ("current-password", "toggle-current-password"),
        ("new-password", "toggle-new-password"),
        ("confirm-password", "toggle-confirm-password"),
    ] {
        init_visibility_toggle(document, input_id, button_id);
    }
}

/// Let a button flip its password field between hidden and plain text.
fn init_visibility_toggle(document: &Document, input_id: &str, button_id: &str) {
    let Ok(button) = get_element_by_id(document, button_id) else {
        return;
    };
    let input_id = input_id.to_owned();
    let button_id = button_id.to_owned();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        unwrap_or_alert(toggle_visibility(&input_id, &button_id));
    }) as Box<dyn Fn(_)>);
    button
        .add_event_listener_with_event_listener("click", closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
}

fn toggle_visibility(input_id: &str, button_id: &str) -> Result<()> {
    let document = get_document()?;
    let input = get_element_by_id_dyn::<HtmlInputElement>(&document, input_id)?;
    let button = get_element_by_id(&document, button_id)?;
    if input.type_() == "password" {
        input.set_type("text");
        add_class(&button, "revealed")?;
    } else {
        input.set_type("password");
        remove_class(&button, "revealed")?;
    }

    Ok(())
}

/// Check the confirmation locally, then submit the password change and reset
/// the form.
#[wasm_bindgen]
pub async fn change_password() {
    let document = unwrap_without_alert(get_document());
    let old_pass = unwrap_or_alert(value_of(&document, "current-password"));
    let new_pass = unwrap_or_alert(value_of(&document, "new-password"));
    let confirm_pass = unwrap_or_alert(value_of(&document, "confirm-password"));

    if new_pass != confirm_pass {
        create_alert("New passwords do not match.", AlertLevel::Error);
        return;
    }

    with_loading(async || {
        let body = json::to_string(&ChangePasswordRequest::new(old_pass, new_pass))?;
        let response_body = api::request("/account/change-password", "post", Some(&body)).await?;
        let message: ApiMessage = json::from_str(&response_body)?;
        create_alert(message.message(), AlertLevel::Info);

        let form =
            get_element_by_id_dyn::<HtmlFormElement>(&get_document()?, "change-password-form")?;
        form.reset();

        Ok(())
    })
    .await;
}

fn value_of(document: &Document, id: &str) -> Result<String> {
    Ok(get_element_by_id_dyn::<HtmlInputElement>(document, id)?.value())
}
