pub mod api_error;
pub mod api_message;
pub mod auth;
pub mod change_password;
pub mod credentials;
pub mod enrollment_offering;
pub mod enrollment_status;
pub mod section;
pub mod section_status;
pub mod submission;
