use serde::{Deserialize, Serialize};

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::{EntityCore, ICON_SET};

const NAME_RULES: ValidationRules = ValidationRules::length(2, 80);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::length(2, 400);

/// Permission keys assignable to roles. The sidebar and the route guards
/// check against these.
pub const PERMISSIONS: &[(&str, &str)] = &[
    ("catalog.manage", "Manage catalog"),
    ("roles.manage", "Manage roles"),
    ("users.manage", "Manage users"),
    ("companies.manage", "Manage companies"),
];

/// Access role. System-seeded roles (owner, dispatcher) ship with
/// `is_default` set and cannot be removed or disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(flatten)]
    pub core: EntityCore,
    pub icon: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub permissions: Vec<String>,
}

impl RoleDraft {
    pub fn from_entity(entity: &Role) -> Self {
        Self {
            name: entity.core.name.clone(),
            description: entity.core.description.clone(),
            icon: entity.icon.clone(),
            permissions: entity.permissions.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        if !ICON_SET.contains(&self.icon.as_str()) {
            errors.add("icon", "Pick an icon from the set");
        }
        if self.permissions.is_empty() {
            errors.add("permissions", "Grant at least one permission");
        } else if let Some(unknown) = self
            .permissions
            .iter()
            .find(|p| !PERMISSIONS.iter().any(|(key, _)| key == &p.as_str()))
        {
            errors.add("permissions", format!("Unknown permission: {}", unknown));
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_permission() {
        let draft = RoleDraft {
            name: "Dispatcher".to_string(),
            description: "Schedules field crews".to_string(),
            icon: "shield".to_string(),
            permissions: vec!["jobs.fly".to_string()],
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("permissions"),
            Some("Unknown permission: jobs.fly")
        );
    }

    #[test]
    fn requires_a_permission() {
        let draft = RoleDraft {
            name: "Dispatcher".to_string(),
            description: "Schedules field crews".to_string(),
            icon: "shield".to_string(),
            permissions: vec![],
        };
        assert!(draft.validate().unwrap_err().get("permissions").is_some());
    }
}
