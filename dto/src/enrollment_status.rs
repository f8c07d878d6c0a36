use serde::{Deserialize, Serialize};

/// Where the student's enrollment for the term currently stands. `Enrolled`
/// means the enrollment is official and the offering is presented read-only.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Draft,
    Enrolled,
    Dropped,
    Rejected,
    #[serde(other)]
    None,
}

impl EnrollmentStatus {
    pub fn is_enrolled(&self) -> bool {
        *self == EnrollmentStatus::Enrolled
    }
}

#[cfg(test)]
mod tests {
    use crate::enrollment_status::EnrollmentStatus;
    use parameterized::parameterized;

    #[parameterized(
        json = {"\"DRAFT\"", "\"ENROLLED\"", "\"DROPPED\"", "\"REJECTED\"", "\"NONE\""},
        expected_status = {
            EnrollmentStatus::Draft,
            EnrollmentStatus::Enrolled,
            EnrollmentStatus::Dropped,
            EnrollmentStatus::Rejected,
            EnrollmentStatus::None
        }
    )]
    fn should_deserialize_status(json: &str, expected_status: EnrollmentStatus) {
        let status: EnrollmentStatus = serde_json::from_str(json).unwrap();
        assert_eq!(expected_status, status);
    }
}
