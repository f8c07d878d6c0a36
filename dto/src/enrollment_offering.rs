use crate::enrollment_status::EnrollmentStatus;
use crate::section::Section;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The enrollment options offered to the student for the active term:
/// the section list in server order, plus the state of the student's
/// enrollment and optional registrar remarks.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentOffering {
    term_name: String,
    student_type: String,
    sections: Vec<Section>,
    enrollment_status: EnrollmentStatus,
    #[serde(default)]
    remarks: Option<String>,
}

impl EnrollmentOffering {
    pub fn new(
        term_name: String,
        student_type: String,
        sections: Vec<Section>,
        enrollment_status: EnrollmentStatus,
        remarks: Option<String>,
    ) -> Self {
        Self {
            term_name,
            student_type,
            sections,
            enrollment_status,
            remarks,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::enrollment_offering::EnrollmentOffering;
    use crate::enrollment_status::EnrollmentStatus;

    #[test]
    fn should_deserialize_offering_without_remarks() {
        let json = r#"{
            "termName": "1st Semester AY 2025-2026",
            "studentType": "REGULAR",
            "sections": [],
            "enrollmentStatus": "NONE"
        }"#;
        let offering: EnrollmentOffering = serde_json::from_str(json).unwrap();
        assert_eq!(
            EnrollmentOffering::new(
                "1st Semester AY 2025-2026".to_owned(),
                "REGULAR".to_owned(),
                vec![],
                EnrollmentStatus::None,
                None,
            ),
            offering
        );
    }
}
