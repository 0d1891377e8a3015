//! Reactive wrapper around `list_core`: one controller per entity screen,
//! parameterized by the entity's API module.

use contracts::common::{ApiError, ApiErrorKind, EntityStatus, ListQuery, Pagination};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::components::toast::ToastService;
use crate::shared::list_core::{ListRow, ListState, Op};

/// The CRUD surface an entity module brings to the generic list flow.
/// Implementors are zero-sized handles over their REST endpoints.
#[allow(async_fn_in_trait)]
pub trait EntityApi: Copy + 'static {
    type Entity: ListRow + Send + Sync + 'static;
    type Draft: Clone + Send + Sync + 'static;

    /// Singular label used in toasts, e.g. "Category".
    fn label(self) -> &'static str;

    async fn fetch_page(self, query: ListQuery) -> Result<(Vec<Self::Entity>, Pagination), ApiError>;
    async fn create(self, draft: Self::Draft) -> Result<Self::Entity, ApiError>;
    async fn update(self, uuid: Uuid, draft: Self::Draft) -> Result<Self::Entity, ApiError>;
    async fn remove(self, uuid: Uuid) -> Result<(), ApiError>;
    async fn set_status(self, uuid: Uuid, status: EntityStatus) -> Result<Self::Entity, ApiError>;
}

pub struct ListController<A: EntityApi> {
    api: A,
    pub state: RwSignal<ListState<A::Entity>>,
    toasts: ToastService,
}

impl<A: EntityApi> Clone for ListController<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: EntityApi> Copy for ListController<A> {}

impl<A: EntityApi> ListController<A> {
    /// Build a controller for one screen. Expects a `ToastService` in the
    /// component tree.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwSignal::new(ListState::new()),
            toasts: ToastService::expect_in_context(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.api.label()
    }

    // -- loading -------------------------------------------------------

    /// Fetch page 1 with the current filters, replacing the rows.
    pub fn load(self) {
        let Some((generation, query)) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        self.run_fetch(generation, query);
    }

    /// Fetch the next page and append it.
    pub fn load_more(self) {
        let Some(Some((generation, query))) = self.state.try_update(|s| s.begin_load_more())
        else {
            return;
        };
        self.run_fetch(generation, query);
    }

    fn run_fetch(self, generation: u64, query: ListQuery) {
        spawn_local(async move {
            match self.api.fetch_page(query).await {
                Ok((data, pagination)) => {
                    self.state
                        .try_update(|s| s.apply_page(generation, data, pagination));
                }
                Err(err) => {
                    log::warn!("{} list fetch failed: {}", self.api.label(), err);
                    let failure = self
                        .state
                        .try_update(|s| s.fail_load(generation, err.message.clone()))
                        .flatten();
                    if failure == Some(true) {
                        self.toasts.error(err.message);
                    }
                }
            }
        });
    }

    pub fn search(self, name: Option<String>) {
        if self.state.try_update(|s| s.set_name_filter(name)).is_some() {
            self.load();
        }
    }

    pub fn filter_status(self, status: Option<EntityStatus>) {
        if self
            .state
            .try_update(|s| s.set_status_filter(status))
            .is_some()
        {
            self.load();
        }
    }

    pub fn toggle_sort_order(self) {
        if self.state.try_update(|s| s.toggle_sort_order()).is_some() {
            self.load();
        }
    }

    // -- mutations -----------------------------------------------------

    /// Create (`target == None`) or update an entity from a validated
    /// draft. `on_done` receives the outcome so the form can close or map
    /// server-side field errors onto itself; transport and server failures
    /// are toasted here.
    pub fn submit(self, target: Option<Uuid>, draft: A::Draft, on_done: Callback<Result<(), ApiError>>) {
        let op = if target.is_some() {
            Op::Updating
        } else {
            Op::Creating
        };
        if self.state.try_update(|s| s.begin_op(op)) != Some(true) {
            return;
        }
        spawn_local(async move {
            let outcome = match target {
                Some(uuid) => match self.api.update(uuid, draft).await {
                    Ok(entity) => {
                        self.state.try_update(|s| s.apply_updated(entity));
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
                None => match self.api.create(draft).await {
                    Ok(entity) => {
                        self.state.try_update(|s| s.apply_created(entity));
                        Ok(())
                    }
                    Err(err) => Err(err),
                },
            };
            self.state.try_update(|s| s.finish_op());
            match outcome {
                Ok(()) => {
                    self.toasts
                        .success(format!("{} saved", self.api.label()));
                    on_done.run(Ok(()));
                }
                Err(err) => {
                    log::warn!("{} save failed: {}", self.api.label(), err);
                    if err.kind != ApiErrorKind::Validation {
                        self.toasts.error(err.message.clone());
                    }
                    on_done.run(Err(err));
                }
            }
        });
    }

    /// Delete after the confirm dialog. Default records are rejected here,
    /// before any request is issued.
    pub fn delete(self, uuid: Uuid) {
        if let Err(err) = self
            .state
            .with_untracked(|s| s.guard_mutation(uuid))
        {
            self.toasts.error(err.message);
            return;
        }
        if self.state.try_update(|s| s.begin_op(Op::Deleting)) != Some(true) {
            return;
        }
        spawn_local(async move {
            let result = self.api.remove(uuid).await;
            self.state.try_update(|s| {
                s.finish_op();
                if result.is_ok() {
                    s.apply_removed(uuid);
                }
            });
            match result {
                Ok(()) => self
                    .toasts
                    .success(format!("{} deleted", self.api.label())),
                Err(err) => {
                    log::warn!("{} delete failed: {}", self.api.label(), err);
                    self.toasts.error(err.message);
                }
            }
        });
    }

    /// Flip a row between active and inactive. Same guard as delete.
    pub fn toggle_status(self, uuid: Uuid) {
        let next = match self.state.with_untracked(|s| {
            s.guard_mutation(uuid)
                .map(|_| s.row(uuid).map(|r| r.status().toggled()))
        }) {
            Ok(Some(status)) => status,
            Ok(None) => return,
            Err(err) => {
                self.toasts.error(err.message);
                return;
            }
        };
        if self.state.try_update(|s| s.begin_op(Op::TogglingStatus)) != Some(true) {
            return;
        }
        spawn_local(async move {
            let result = self.api.set_status(uuid, next).await;
            self.state.try_update(|s| s.finish_op());
            match result {
                Ok(entity) => {
                    self.state.try_update(|s| s.apply_updated(entity));
                    self.toasts.success(format!(
                        "{} is now {}",
                        self.api.label(),
                        next.label().to_lowercase()
                    ));
                }
                Err(err) => {
                    log::warn!("{} status change failed: {}", self.api.label(), err);
                    self.toasts.error(err.message);
                }
            }
        });
    }
}
