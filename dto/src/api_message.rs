use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Plain acknowledgment body returned by mutating endpoints.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct ApiMessage {
    message: String,
}

impl ApiMessage {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}
