pub mod api;
pub mod ui;

use contracts::catalog::service::Service;
use contracts::common::EntityStatus;
use uuid::Uuid;

use crate::shared::list_core::ListRow;

impl ListRow for Service {
    fn uuid(&self) -> Uuid {
        self.core.uuid
    }
    fn display_name(&self) -> &str {
        &self.core.name
    }
    fn is_default(&self) -> bool {
        self.core.is_default
    }
    fn status(&self) -> EntityStatus {
        self.core.status
    }
}
