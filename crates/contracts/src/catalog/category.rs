use serde::{Deserialize, Serialize};

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::{EntityCore, ICON_SET};

const NAME_RULES: ValidationRules = ValidationRules::length(2, 80);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::length(2, 400);

/// Work category (plumbing, electrical, ...). Top of the catalog hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub core: EntityCore,
    /// Identifier into the fixed icon set.
    pub icon: String,
    /// Hex accent color, e.g. "#2F80ED".
    pub color: String,
}

/// Create/update payload for a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl CategoryDraft {
    pub fn from_entity(entity: &Category) -> Self {
        Self {
            name: entity.core.name.clone(),
            description: entity.core.description.clone(),
            icon: entity.icon.clone(),
            color: entity.color.clone(),
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
        if !is_hex_color(&self.color) {
            errors.add("color", "Color must be a hex value like #2F80ED");
        }
        errors.into_result()
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> CategoryDraft {
        CategoryDraft {
            name: "Plumbing".to_string(),
            description: "Water supply and drainage work".to_string(),
            icon: "droplet".to_string(),
            color: "#2F80ED".to_string(),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_icon() {
        let mut draft = valid_draft();
        draft.icon = "sparkles".to_string();
        let errors = draft.validate().unwrap_err();
        assert!(errors.get("icon").is_some());
    }

    #[test]
    fn rejects_bad_color() {
        let mut draft = valid_draft();
        draft.color = "2F80ED".to_string();
        assert!(draft.validate().unwrap_err().get("color").is_some());
        draft.color = "#2F80".to_string();
        assert!(draft.validate().unwrap_err().get("color").is_some());
        draft.color = "#fff".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn rejects_short_name() {
        let mut draft = valid_draft();
        draft.name = "P".to_string();
        assert!(draft.validate().unwrap_err().get("name").is_some());
    }
}
