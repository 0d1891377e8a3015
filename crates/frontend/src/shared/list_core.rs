//! State machine behind every entity list screen: paginated loading with
//! "load more", stale-response discarding, the default-record guard and
//! local merging of mutation results.
//!
//! Signal-free on purpose so the whole flow is testable on the host; the
//! reactive wiring lives in `list_controller`.

use contracts::common::{ApiError, EntityStatus, ListQuery, Pagination, SortOrder, NOT_FOUND_MESSAGE};
use uuid::Uuid;

/// Row shape the generic list flow needs from an entity.
pub trait ListRow: Clone {
    fn uuid(&self) -> Uuid;
    fn display_name(&self) -> &str;
    fn is_default(&self) -> bool;
    fn status(&self) -> EntityStatus;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Mutation in flight on top of a loaded list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Creating,
    Updating,
    Deleting,
    TogglingStatus,
}

#[derive(Clone)]
pub struct ListState<T> {
    pub phase: ListPhase,
    pub op: Option<Op>,
    /// A "load more" request is in flight; rows already shown stay put.
    pub appending: bool,
    pub items: Vec<T>,
    pub query: ListQuery,
    pub pagination: Pagination,
    generation: u64,
}

impl<T: ListRow> ListState<T> {
    pub fn new() -> Self {
        let query = ListQuery::default();
        let pagination = Pagination::empty(query.limit);
        Self {
            phase: ListPhase::Idle,
            op: None,
            appending: false,
            items: Vec::new(),
            query,
            pagination,
            generation: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == ListPhase::Loading || self.appending || self.op.is_some()
    }

    // -- filters: every change restarts from page 1 --------------------

    pub fn set_name_filter(&mut self, name: Option<String>) {
        self.query.name = name.filter(|n| !n.trim().is_empty());
        self.query.page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<EntityStatus>) {
        self.query.status = status;
        self.query.page = 1;
    }

    pub fn toggle_sort_order(&mut self) {
        self.query.sort_order = self.query.sort_order.toggled();
        self.query.page = 1;
    }

    // -- loading -------------------------------------------------------

    /// Start a fresh load of page 1 with the current filters. Returns the
    /// generation token the response must present to be applied.
    pub fn begin_load(&mut self) -> (u64, ListQuery) {
        self.query.page = 1;
        self.generation += 1;
        self.appending = false;
        self.phase = ListPhase::Loading;
        (self.generation, self.query.clone())
    }

    /// Start fetching the next page, or `None` when there is nothing more
    /// to fetch or a fetch is already running.
    pub fn begin_load_more(&mut self) -> Option<(u64, ListQuery)> {
        if self.phase != ListPhase::Loaded || self.appending || !self.pagination.has_more() {
            return None;
        }
        self.query.page = self.pagination.page + 1;
        self.generation += 1;
        self.appending = true;
        Some((self.generation, self.query.clone()))
    }

    /// Apply a page response. A response carrying a stale generation token
    /// is dropped so a slow page-1 fetch can never clobber newer filters.
    pub fn apply_page(&mut self, generation: u64, data: Vec<T>, pagination: Pagination) -> bool {
        if generation != self.generation {
            return false;
        }
        if pagination.page <= 1 {
            self.items = data;
        } else {
            for row in data {
                if !self.items.iter().any(|r| r.uuid() == row.uuid()) {
                    self.items.push(row);
                }
            }
        }
        self.pagination = pagination;
        self.query.page = pagination.page;
        self.appending = false;
        self.phase = ListPhase::Loaded;
        true
    }

    /// Record a failed load. Returns whether the failure belonged to a
    /// "load more" request (`None` when stale): append failures keep the
    /// rows on screen, initial failures become the error state.
    pub fn fail_load(&mut self, generation: u64, message: String) -> Option<bool> {
        if generation != self.generation {
            return None;
        }
        let was_appending = self.appending;
        if was_appending {
            self.appending = false;
            self.query.page = self.pagination.page;
        } else {
            self.phase = ListPhase::Error(message);
        }
        Some(was_appending)
    }

    // -- mutations -----------------------------------------------------

    pub fn row(&self, uuid: Uuid) -> Option<&T> {
        self.items.iter().find(|r| r.uuid() == uuid)
    }

    /// Client-side gate run before any delete/status request goes out.
    /// Mirrors the backend rule for default records so no round-trip is
    /// wasted on a mutation that cannot succeed.
    pub fn guard_mutation(&self, uuid: Uuid) -> Result<(), ApiError> {
        match self.row(uuid) {
            None => Err(ApiError::not_found(NOT_FOUND_MESSAGE)),
            Some(row) if row.is_default() => Err(ApiError::default_entity_locked()),
            Some(_) => Ok(()),
        }
    }

    pub fn begin_op(&mut self, op: Op) -> bool {
        if self.is_busy() {
            return false;
        }
        self.op = Some(op);
        true
    }

    pub fn finish_op(&mut self) {
        self.op = None;
    }

    /// Merge a freshly created entity into the list at the position the
    /// current sort order dictates, without refetching.
    pub fn apply_created(&mut self, entity: T) {
        if let Some(existing) = self.items.iter_mut().find(|r| r.uuid() == entity.uuid()) {
            *existing = entity;
            return;
        }
        let key = entity.display_name().to_lowercase();
        let order = self.query.sort_order;
        let index = self.items.partition_point(|row| {
            let row_key = row.display_name().to_lowercase();
            match order {
                SortOrder::Asc => row_key <= key,
                SortOrder::Desc => row_key >= key,
            }
        });
        self.items.insert(index, entity);
        self.pagination.total += 1;
        self.pagination.recalc();
    }

    pub fn apply_updated(&mut self, entity: T) {
        if let Some(existing) = self.items.iter_mut().find(|r| r.uuid() == entity.uuid()) {
            *existing = entity;
        }
    }

    pub fn apply_removed(&mut self, uuid: Uuid) {
        let before = self.items.len();
        self.items.retain(|r| r.uuid() != uuid);
        if self.items.len() < before {
            self.pagination.total = self.pagination.total.saturating_sub(1);
            self.pagination.recalc();
        }
    }
}

impl<T: ListRow> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::{ApiErrorKind, DEFAULT_ENTITY_MESSAGE};

    #[derive(Clone)]
    struct TestRow {
        uuid: Uuid,
        name: String,
        is_default: bool,
        status: EntityStatus,
    }

    impl ListRow for TestRow {
        fn uuid(&self) -> Uuid {
            self.uuid
        }
        fn display_name(&self) -> &str {
            &self.name
        }
        fn is_default(&self) -> bool {
            self.is_default
        }
        fn status(&self) -> EntityStatus {
            self.status
        }
    }

    fn row(n: u128, name: &str) -> TestRow {
        TestRow {
            uuid: Uuid::from_u128(n),
            name: name.to_string(),
            is_default: false,
            status: EntityStatus::Active,
        }
    }

    fn default_row(n: u128, name: &str) -> TestRow {
        TestRow {
            is_default: true,
            ..row(n, name)
        }
    }

    fn page(page: u32, limit: u32, total: u64) -> Pagination {
        let mut p = Pagination {
            page,
            limit,
            total,
            total_pages: 1,
        };
        let current = p.page;
        p.recalc();
        p.page = current;
        p
    }

    fn loaded_state(rows: Vec<TestRow>) -> ListState<TestRow> {
        let mut state = ListState::new();
        let total = rows.len() as u64;
        let (generation, _) = state.begin_load();
        state.apply_page(generation, rows, page(1, 20, total));
        state
    }

    #[test]
    fn ten_trades_in_two_pages_then_delete() {
        let mut state: ListState<TestRow> = ListState::new();
        state.query.limit = 5;

        let (generation, query) = state.begin_load();
        assert_eq!(query.page, 1);
        let first: Vec<_> = (0..5).map(|i| row(i, &format!("trade-{}", i))).collect();
        assert!(state.apply_page(generation, first, page(1, 5, 10)));
        assert_eq!(state.items.len(), 5);
        assert!(state.pagination.has_more());

        let (generation, query) = state.begin_load_more().expect("second page available");
        assert_eq!(query.page, 2);
        let second: Vec<_> = (5..10).map(|i| row(i, &format!("trade-{}", i))).collect();
        assert!(state.apply_page(generation, second, page(2, 5, 10)));
        assert_eq!(state.items.len(), 10);
        assert!(!state.pagination.has_more());
        assert!(state.begin_load_more().is_none());

        let third = state.items[2].uuid();
        assert!(state.guard_mutation(third).is_ok());
        state.apply_removed(third);
        assert_eq!(state.items.len(), 9);
        assert!(state.row(third).is_none());
        assert_eq!(state.pagination.total, 9);
    }

    #[test]
    fn appending_never_duplicates_a_uuid() {
        let mut state = loaded_state(vec![row(1, "a"), row(2, "b")]);
        state.pagination = page(1, 2, 4);

        let (generation, _) = state.begin_load_more().unwrap();
        // backend shifted: row 2 reappears on page 2
        let overlap = vec![row(2, "b"), row(3, "c")];
        state.apply_page(generation, overlap, page(2, 2, 4));
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state: ListState<TestRow> = ListState::new();
        let (stale, _) = state.begin_load();

        state.set_name_filter(Some("boiler".to_string()));
        let (current, query) = state.begin_load();
        assert_eq!(query.page, 1);

        assert!(!state.apply_page(stale, vec![row(9, "stale")], page(1, 20, 1)));
        assert!(state.items.is_empty());
        assert_eq!(state.phase, ListPhase::Loading);

        assert!(state.apply_page(current, vec![row(1, "boiler")], page(1, 20, 1)));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.phase, ListPhase::Loaded);
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut state: ListState<TestRow> = ListState::new();
        let (stale, _) = state.begin_load();
        let (current, _) = state.begin_load();
        assert_eq!(state.fail_load(stale, "boom".to_string()), None);
        assert_eq!(state.phase, ListPhase::Loading);
        assert_eq!(state.fail_load(current, "boom".to_string()), Some(false));
        assert_eq!(state.phase, ListPhase::Error("boom".to_string()));
    }

    #[test]
    fn failed_append_keeps_rows() {
        let mut state = loaded_state(vec![row(1, "a")]);
        state.pagination = page(1, 1, 3);
        let (generation, _) = state.begin_load_more().unwrap();
        assert_eq!(state.fail_load(generation, "offline".to_string()), Some(true));
        assert_eq!(state.phase, ListPhase::Loaded);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn default_rows_are_guarded() {
        let state = loaded_state(vec![default_row(1, "General"), row(2, "Custom")]);
        let err = state.guard_mutation(Uuid::from_u128(1)).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::DefaultEntityLocked);
        assert_eq!(err.message, DEFAULT_ENTITY_MESSAGE);
        assert!(state.guard_mutation(Uuid::from_u128(2)).is_ok());
    }

    #[test]
    fn missing_rows_report_not_found() {
        let state = loaded_state(vec![row(1, "a")]);
        let err = state.guard_mutation(Uuid::from_u128(99)).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
    }

    #[test]
    fn created_row_lands_at_its_sort_position() {
        let mut state = loaded_state(vec![row(1, "Drain"), row(2, "Roofing")]);
        state.apply_created(row(3, "Heating"));
        let names: Vec<_> = state.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Drain", "Heating", "Roofing"]);
        assert_eq!(state.pagination.total, 3);

        let mut state = loaded_state(vec![row(2, "Roofing"), row(1, "Drain")]);
        state.query.sort_order = SortOrder::Desc;
        state.apply_created(row(3, "Heating"));
        let names: Vec<_> = state.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Roofing", "Heating", "Drain"]);
    }

    #[test]
    fn created_row_appears_exactly_once() {
        let mut state = loaded_state(vec![row(1, "Drain")]);
        state.apply_created(row(1, "Drain cleaning"));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Drain cleaning");
        assert_eq!(state.pagination.total, 1);
    }

    #[test]
    fn ops_are_exclusive_while_busy() {
        let mut state = loaded_state(vec![row(1, "a")]);
        assert!(state.begin_op(Op::Deleting));
        assert!(!state.begin_op(Op::Creating));
        state.finish_op();
        assert!(state.begin_op(Op::Creating));
    }

    #[test]
    fn updated_row_is_replaced_in_place() {
        let mut state = loaded_state(vec![row(1, "a"), row(2, "b")]);
        let mut changed = row(2, "b2");
        changed.status = EntityStatus::Inactive;
        state.apply_updated(changed);
        assert_eq!(state.items[1].name, "b2");
        assert_eq!(state.items[1].status, EntityStatus::Inactive);
        assert_eq!(state.items.len(), 2);
    }
}
