use serde::{Deserialize, Serialize};

/// Error body shape used across the API. Servers populate either `message`
/// or `error`; an empty or unparseable body deserializes to the default.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: Option<String>, error: Option<String>) -> Self {
        Self { message, error }
    }

    /// The text to surface to the user: `message`, then `error`, then a
    /// status-coded fallback.
    pub fn error_message(&self, status: u16) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| format!("Error {status}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::api_error::ApiErrorBody;
    use parameterized::parameterized;

    #[parameterized(
        message = {Some("Not enough units."), Some("Not enough units."), None, None},
        error = {Some("VALIDATION"), None, Some("VALIDATION"), None},
        expected = {"Not enough units.", "Not enough units.", "VALIDATION", "Error 400"}
    )]
    fn should_pick_error_message(message: Option<&str>, error: Option<&str>, expected: &str) {
        let body = ApiErrorBody::new(
            message.map(str::to_owned),
            error.map(str::to_owned),
        );
        assert_eq!(expected, body.error_message(400));
    }

    #[test]
    fn should_deserialize_empty_body_as_default() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(ApiErrorBody::default(), body);
    }
}
