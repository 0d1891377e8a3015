use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::EntityRef;

const USERNAME_RULES: ValidationRules = ValidationRules::length(3, 40);
const PASSWORD_RULES: ValidationRules = ValidationRules::length(8, 72);

/// Console user. Users do not follow the catalog lifecycle: they carry a
/// plain active flag and belong to exactly one company and role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: EntityRef,
    pub company_id: Option<i64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role_id: i64,
    /// Required on create, ignored on update.
    pub password: Option<String>,
    pub is_active: bool,
}

impl UserDraft {
    pub fn from_entity(entity: &User) -> Self {
        Self {
            username: entity.username.clone(),
            email: entity.email.clone(),
            full_name: entity.full_name.clone(),
            role_id: entity.role.id,
            password: None,
            is_active: entity.is_active,
        }
    }

    pub fn validate(&self, require_password: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "username",
            USERNAME_RULES.validate_string(&self.username, "Username"),
        );
        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            errors.add("email", "Enter a valid email address");
        }
        if self.role_id <= 0 {
            errors.add("role_id", "Select a role");
        }
        match self.password.as_deref() {
            Some(password) => {
                errors.check("password", PASSWORD_RULES.validate_string(password, "Password"));
            }
            None if require_password => errors.add("password", "Password is required"),
            None => {}
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        UserDraft {
            username: "j.doe".to_string(),
            email: "j.doe@example.com".to_string(),
            full_name: Some("Jordan Doe".to_string()),
            role_id: 2,
            password: Some("hunter2hunter2".to_string()),
            is_active: true,
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(valid_draft().validate(true).is_ok());
    }

    #[test]
    fn password_required_only_on_create() {
        let mut draft = valid_draft();
        draft.password = None;
        assert!(draft.validate(true).unwrap_err().get("password").is_some());
        assert!(draft.validate(false).is_ok());
    }

    #[test]
    fn rejects_mangled_email() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        assert!(draft.validate(true).unwrap_err().get("email").is_some());
        draft.email = "@example.com".to_string();
        assert!(draft.validate(true).unwrap_err().get("email").is_some());
    }
}
