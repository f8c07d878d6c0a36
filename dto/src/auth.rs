use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Authentication payload carried by a successful login response.
#[derive(Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct AuthData {
    token: String,
    #[serde(default)]
    roles: Vec<String>,
}

impl Debug for AuthData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthData {{token=MASKED, roles={:?}}}", self.roles)
    }
}

impl AuthData {
    pub fn new(token: String, roles: Vec<String>) -> Self {
        Self { token, roles }
    }

    /// The role the client acts under when an account carries several:
    /// ADMIN wins over PROFESSOR, then the first listed role, then STUDENT.
    pub fn primary_role(&self) -> String {
        if self.roles.iter().any(|role| role == "ADMIN") {
            "ADMIN".to_owned()
        } else if self.roles.iter().any(|role| role == "PROFESSOR") {
            "PROFESSOR".to_owned()
        } else if let Some(first) = self.roles.first() {
            first.clone()
        } else {
            "STUDENT".to_owned()
        }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct LoginResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<AuthData>,
}

impl LoginResponse {
    pub fn new(success: bool, message: Option<String>, data: Option<AuthData>) -> Self {
        Self {
            success,
            message,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::AuthData;
    use parameterized::parameterized;

    #[parameterized(
        roles = {
            vec!["STUDENT", "ADMIN"],
            vec!["PROFESSOR", "STUDENT"],
            vec!["REGISTRAR"],
            vec![]
        },
        expected_role = {"ADMIN", "PROFESSOR", "REGISTRAR", "STUDENT"}
    )]
    fn should_pick_primary_role(roles: Vec<&str>, expected_role: &str) {
        let data = AuthData::new(
            "token".to_owned(),
            roles.into_iter().map(str::to_owned).collect(),
        );
        assert_eq!(expected_role, data.primary_role());
    }

    #[test]
    fn should_mask_token_in_debug_output() {
        let data = AuthData::new("secret-token".to_owned(), vec!["STUDENT".to_owned()]);
        let debug = format!("{data:?}");
        assert!(!debug.contains("secret-token"));
    }
}
