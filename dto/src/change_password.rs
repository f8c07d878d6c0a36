use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    old_pass: String,
    new_pass: String,
}

impl Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChangePasswordRequest {{old_pass=MASKED, new_pass=MASKED}}")
    }
}

impl ChangePasswordRequest {
    pub fn new(old_pass: String, new_pass: String) -> Self {
        Self { old_pass, new_pass }
    }
}
