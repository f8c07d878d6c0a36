use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The final list of chosen sections, posted to the enrollment endpoint.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentSubmission {
    section_ids: Vec<u32>,
}

impl EnrollmentSubmission {
    pub fn new(section_ids: Vec<u32>) -> Self {
        Self { section_ids }
    }
}
