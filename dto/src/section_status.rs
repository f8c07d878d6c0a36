use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Capacity status of a section as reported by the server. Anything the
/// server sends besides `OPEN` and `FULL` maps to [SectionStatus::Unavailable].
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionStatus {
    Open,
    Full,
    #[serde(other)]
    Unavailable,
}

impl SectionStatus {
    pub fn is_open(&self) -> bool {
        *self == SectionStatus::Open
    }
}

impl Display for SectionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionStatus::Open => write!(f, "OPEN"),
            SectionStatus::Full => write!(f, "FULL"),
            SectionStatus::Unavailable => write!(f, "UNAVAILABLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::section_status::SectionStatus;
    use parameterized::parameterized;

    #[parameterized(
        json = {"\"OPEN\"", "\"FULL\"", "\"CANCELLED\""},
        expected_status = {SectionStatus::Open, SectionStatus::Full, SectionStatus::Unavailable}
    )]
    fn should_deserialize_status(json: &str, expected_status: SectionStatus) {
        let status: SectionStatus = serde_json::from_str(json).unwrap();
        assert_eq!(expected_status, status);
    }

    #[parameterized(
        status = {SectionStatus::Open, SectionStatus::Full, SectionStatus::Unavailable},
        expected_is_open = {true, false, false}
    )]
    fn should_tell_whether_open(status: SectionStatus, expected_is_open: bool) {
        assert_eq!(expected_is_open, status.is_open());
    }
}
