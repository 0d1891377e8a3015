use serde::{Deserialize, Serialize};

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::{EntityCore, EntityRef};

const NAME_RULES: ValidationRules = ValidationRules::length(2, 80);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::length(2, 400);
const UNIT_RULES: ValidationRules = ValidationRules::length(1, 16);

/// Stock material (copper pipe, breaker, ...), attached to the services
/// that consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    #[serde(flatten)]
    pub core: EntityCore,
    /// Unit of measure shown next to quantities, e.g. "m", "pcs".
    pub unit: String,
    #[serde(default)]
    pub services: Vec<EntityRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialDraft {
    pub name: String,
    pub description: String,
    pub unit: String,
    pub service_ids: Vec<i64>,
}

impl MaterialDraft {
    pub fn from_entity(entity: &Material) -> Self {
        Self {
            name: entity.core.name.clone(),
            description: entity.core.description.clone(),
            unit: entity.unit.clone(),
            service_ids: entity.services.iter().map(|s| s.id).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        errors.check("unit", UNIT_RULES.validate_string(&self.unit, "Unit"));
        if self.service_ids.is_empty() {
            errors.add("service_ids", "Select at least one service");
        }
        errors.into_result()
    }
}
