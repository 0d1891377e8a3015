use serde::{Deserialize, Serialize};

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::{EntityCore, EntityRef};

const NAME_RULES: ValidationRules = ValidationRules::length(2, 80);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::length(2, 400);

/// Offered service (faucet replacement, panel upgrade, ...), attached to
/// the trades that can perform it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten)]
    pub core: EntityCore,
    #[serde(default)]
    pub trades: Vec<EntityRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub trade_ids: Vec<i64>,
}

impl ServiceDraft {
    pub fn from_entity(entity: &Service) -> Self {
        Self {
            name: entity.core.name.clone(),
            description: entity.core.description.clone(),
            trade_ids: entity.trades.iter().map(|t| t.id).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        if self.trade_ids.is_empty() {
            errors.add("trade_ids", "Select at least one trade");
        }
        errors.into_result()
    }
}
