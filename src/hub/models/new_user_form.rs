//! # New User Form
//!
//! Transient draft of a user being entered. Owned by the view model and
//! reset after a successful create.

use super::user::User;

/// Editable fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    UserId,
    Name,
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserForm {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl NewUserForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::UserId => self.user_id = value,
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
        }
    }

    /// A draft can only be submitted with a non-blank user id
    pub fn has_user_id(&self) -> bool {
        !self.user_id.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_empty() && self.name.is_empty() && self.email.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the request payload; empty optional fields are left out
    pub fn to_user(&self) -> User {
        User {
            user_id: self.user_id.clone(),
            name: non_empty(&self.name),
            email: non_empty(&self.email),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
