pub mod api;
pub mod ui;

use contracts::common::EntityStatus;
use contracts::system::user::User;
use uuid::Uuid;

use crate::shared::list_core::ListRow;

// Users have no system-seeded records; the default-record guard never
// fires for them.
impl ListRow for User {
    fn uuid(&self) -> Uuid {
        self.uuid
    }
    fn display_name(&self) -> &str {
        &self.username
    }
    fn is_default(&self) -> bool {
        false
    }
    fn status(&self) -> EntityStatus {
        if self.is_active {
            EntityStatus::Active
        } else {
            EntityStatus::Inactive
        }
    }
}
