//! # User Record
//!
//! A user as stored by the remote service. Identity is `user_id`; the
//! display fields are optional and omitted from request bodies when absent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            email: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name for table display, empty when unset
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Email for table display, empty when unset
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_should_omit_missing_optional_fields_when_serialized() {
        let user = User::new("u1");
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({ "user_id": "u1" }));
    }

    #[test]
    fn user_should_deserialize_with_null_or_missing_fields() {
        let user: User =
            serde_json::from_value(json!({ "user_id": "u2", "name": null })).unwrap();
        assert_eq!(user, User::new("u2"));
        assert_eq!(user.display_name(), "");
        assert_eq!(user.display_email(), "");
    }

    #[test]
    fn user_should_keep_display_fields() {
        let user = User::new("u3").with_name("Ada").with_email("ada@example.com");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(user.display_email(), "ada@example.com");
    }
}
