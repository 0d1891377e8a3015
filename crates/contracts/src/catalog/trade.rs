use serde::{Deserialize, Serialize};

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::{EntityCore, EntityRef};

const NAME_RULES: ValidationRules = ValidationRules::length(2, 80);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::length(2, 400);

/// Trade (plumber, electrician, ...), grouped under one or more categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    #[serde(flatten)]
    pub core: EntityCore,
    #[serde(default)]
    pub categories: Vec<EntityRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeDraft {
    pub name: String,
    pub description: String,
    pub category_ids: Vec<i64>,
}

impl TradeDraft {
    pub fn from_entity(entity: &Trade) -> Self {
        Self {
            name: entity.core.name.clone(),
            description: entity.core.description.clone(),
            category_ids: entity.categories.iter().map(|c| c.id).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        if self.category_ids.is_empty() {
            errors.add("category_ids", "Select at least one category");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_a_category() {
        let draft = TradeDraft {
            name: "Electrician".to_string(),
            description: "Wiring, panels and fixtures".to_string(),
            category_ids: vec![],
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.get("category_ids").is_some());
    }

    #[test]
    fn accepts_valid_draft() {
        let draft = TradeDraft {
            name: "Electrician".to_string(),
            description: "Wiring, panels and fixtures".to_string(),
            category_ids: vec![3],
        };
        assert!(draft.validate().is_ok());
    }
}
