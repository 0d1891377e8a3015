use serde::{Deserialize, Serialize};

use crate::common::validation::{FieldErrors, ValidationRules};
use crate::common::EntityCore;

const NAME_RULES: ValidationRules = ValidationRules::length(2, 80);
const DESCRIPTION_RULES: ValidationRules = ValidationRules::length(2, 400);

/// Tenant company. The platform operator's own company is seeded with
/// `is_default` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    #[serde(flatten)]
    pub core: EntityCore,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
}

impl CompanyDraft {
    pub fn from_entity(entity: &Company) -> Self {
        Self {
            name: entity.core.name.clone(),
            description: entity.core.description.clone(),
            logo_url: entity.logo_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "description",
            DESCRIPTION_RULES.validate_string(&self.description, "Description"),
        );
        errors.into_result()
    }
}
