use crate::error::Error;
use crate::utils::navigate_to;
use crate::{Result, json, storage, web};
use dto::api_error::ApiErrorBody;

const API_BASE: &str = "/api";

/// Issue an API request with the stored bearer credential attached.
///
/// A 401 clears the stored session and redirects to the login page; callers
/// receive the unauthenticated error and must not surface it themselves.
/// Other non-success statuses carry the server's `message`/`error` body text.
pub async fn request(endpoint: &str, method: &str, body: Option<&str>) -> Result<String> {
    let url = format!("{API_BASE}{endpoint}");
    let token = storage::get_token()?;
    let authorization = token.map(|token| format!("Bearer {token}"));
    let content_type = body.map(|_| "application/json");
    let response = web::fetch(&url, method, content_type, authorization.as_deref(), body).await?;

    let status = response.status();
    if status == 401 {
        storage::clear_session()?;
        navigate_to("/login")?;
        return Err(Error::unauthenticated());
    }

    let body = response.body().clone().unwrap_or_default();
    if (200..400).contains(&status) {
        Ok(body)
    } else {
        // An empty or unparseable body counts as an empty error body.
        let error_body: ApiErrorBody = json::from_str(&body).unwrap_or_default();
        Err(Error::new(
            &error_body.error_message(status),
            &format!("Server error [status: {status}]"),
        ))
    }
}
