use crate::component::alert::{AlertLevel, create_alert};
use crate::enrollment::with_state;
use crate::error::Error;
use crate::user_interface::with_loading;
use crate::utils::navigate_to;
use crate::{api, json};
use dto::api_message::ApiMessage;
use dto::submission::EnrollmentSubmission;
use wasm_bindgen::prelude::wasm_bindgen;

/// Post the final selection. Success surfaces the server's message and moves
/// on to the schedule page; failure leaves the user on the confirmation step
/// with the selection intact.
#[wasm_bindgen]
pub async fn submit_enrollment() {
    with_loading(async || {
        let section_ids = with_state(|state| state.selected_ids());
        if section_ids.is_empty() {
            return Err(Error::new(
                "Please select at least one subject.",
                "refused to submit an empty selection",
            ));
        }

        let body = json::to_string(&EnrollmentSubmission::new(section_ids))?;
        let response_body = api::request("/enrollment/submit", "post", Some(&body)).await?;
        let message: ApiMessage = json::from_str(&response_body)?;
        create_alert(message.message(), AlertLevel::Info);
        navigate_to("/student_schedule")
    })
    .await;
}
