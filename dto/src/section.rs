use crate::section_status::SectionStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One schedulable offering of a subject for the active term, with its own
/// capacity status and meeting schedule. Immutable once fetched.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    section_no: u32,
    section_name: String,
    subject_code: String,
    subject_title: String,
    units: u32,
    schedule: String,
    status: SectionStatus,
}

impl Section {
    pub fn new(
        section_no: u32,
        section_name: String,
        subject_code: String,
        subject_title: String,
        units: u32,
        schedule: String,
        status: SectionStatus,
    ) -> Self {
        Self {
            section_no,
            section_name,
            subject_code,
            subject_title,
            units,
            schedule,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::section::Section;
    use crate::section_status::SectionStatus;

    #[test]
    fn should_deserialize_section_from_wire_names() {
        let json = r#"{
            "sectionNo": 42,
            "sectionName": "BSCS 1-1",
            "subjectCode": "CS101",
            "subjectTitle": "Introduction to Computing",
            "units": 3,
            "schedule": "MWF 08:00-09:00",
            "status": "OPEN"
        }"#;
        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(
            Section::new(
                42,
                "BSCS 1-1".to_owned(),
                "CS101".to_owned(),
                "Introduction to Computing".to_owned(),
                3,
                "MWF 08:00-09:00".to_owned(),
                SectionStatus::Open,
            ),
            section
        );
    }
}
