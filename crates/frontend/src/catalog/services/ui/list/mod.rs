use contracts::catalog::service::{Service, ServiceDraft};
use contracts::common::validation::FieldErrors;
use contracts::common::{ApiError, EntityStatus, SortOrder};
use leptos::prelude::*;

use super::details::ServiceDetails;
use crate::catalog::services::api::ServicesApi;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::side_sheet::SideSheet;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_core::ListPhase;
use crate::shared::messages;
use crate::system::auth::guard::RequirePermission;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <RequirePermission permission="catalog.manage">
            <ServicesList />
        </RequirePermission>
    }
}

fn trade_names(service: &Service) -> String {
    if service.trades.is_empty() {
        return "-".to_string();
    }
    service
        .trades
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
fn ServicesList() -> impl IntoView {
    let controller = ListController::new(ServicesApi);
    let state = controller.state;

    let editing: RwSignal<Option<Service>> = RwSignal::new(None);
    let (sheet_open, set_sheet_open) = signal(false);
    let pending_delete: RwSignal<Option<Service>> = RwSignal::new(None);
    let server_errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::new());

    controller.load();

    let saving = Signal::derive(move || state.with(|s| s.op.is_some()));

    let open_edit = move |service: Service| {
        editing.set(Some(service));
        server_errors.set(FieldErrors::new());
        set_sheet_open.set(true);
    };

    let handle_submit = Callback::new(move |draft: ServiceDraft| {
        let target = editing.get_untracked().map(|s| s.core.uuid);
        controller.submit(
            target,
            draft,
            Callback::new(move |result: Result<(), ApiError>| match result {
                Ok(()) => {
                    set_sheet_open.set(false);
                    server_errors.set(FieldErrors::new());
                }
                Err(err) => {
                    let mut errors = FieldErrors::new();
                    errors.merge_server_errors(&err.field_errors);
                    if errors.is_empty() {
                        errors.add("_form", err.message.clone());
                    }
                    server_errors.set(errors);
                }
            }),
        );
    });

    let on_status_filter = move |ev: leptos::ev::Event| {
        let status = match event_target_value(&ev).as_str() {
            "ACTIVE" => Some(EntityStatus::Active),
            "INACTIVE" => Some(EntityStatus::Inactive),
            _ => None,
        };
        controller.filter_status(status);
    };

    let sort_indicator = move || {
        state.with(|s| match s.query.sort_order {
            SortOrder::Asc => " \u{25B2}",
            SortOrder::Desc => " \u{25BC}",
        })
    };

    let rows = move || state.with(|s| s.items.clone());

    let body = move || match state.with(|s| s.phase.clone()) {
        ListPhase::Idle | ListPhase::Loading => {
            view! { <div class="page__loading">"Loading..."</div> }.into_any()
        }
        ListPhase::Error(message) => view! {
            <div class="page__error">
                {icon("alert-triangle")}
                <p>{message}</p>
                <Button variant="secondary" on_click=Callback::new(move |_| controller.load())>
                    {messages::RETRY}
                </Button>
            </div>
        }
        .into_any(),
        ListPhase::Loaded if state.with(|s| s.items.is_empty()) => {
            view! { <div class="page__empty">{messages::EMPTY_LIST}</div> }.into_any()
        }
        ListPhase::Loaded => view! {
            <table class="table">
                <thead>
                    <tr>
                        <th
                            class="table__th table__th--sortable"
                            on:click=move |_| controller.toggle_sort_order()
                        >
                            "Name"
                            {sort_indicator}
                        </th>
                        <th class="table__th">"Description"</th>
                        <th class="table__th">"Trades"</th>
                        <th class="table__th">"Status"</th>
                        <th class="table__th">"Updated"</th>
                        <th class="table__th table__th--actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|service| service.core.uuid
                        children=move |service: Service| {
                            let uuid = service.core.uuid;
                            let is_default = service.core.is_default;
                            let trades = trade_names(&service);
                            let edit_target = service.clone();
                            let delete_target = service.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__td">
                                        <span class="table__name">{service.core.name.clone()}</span>
                                        <Show when=move || is_default>
                                            <span class="badge badge--outline">"Default"</span>
                                        </Show>
                                    </td>
                                    <td class="table__td">{service.core.description.clone()}</td>
                                    <td class="table__td">{trades}</td>
                                    <td class="table__td">
                                        <StatusBadge status=service.core.status />
                                    </td>
                                    <td class="table__td">
                                        {format_timestamp(service.core.updated_at)}
                                    </td>
                                    <td class="table__td table__td--actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_edit(edit_target.clone())
                                        >
                                            {icon("pencil")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Toggle status"
                                            on:click=move |_| controller.toggle_status(uuid)
                                        >
                                            {icon("power")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |_| {
                                                pending_delete.set(Some(delete_target.clone()))
                                            }
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <PaginationControls
                pagination=Signal::derive(move || state.with(|s| s.pagination))
                shown=Signal::derive(move || state.with(|s| s.items.len()))
                busy=Signal::derive(move || state.with(|s| s.appending))
                on_load_more=Callback::new(move |_| controller.load_more())
            />
        }
        .into_any(),
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Services"</h2>
                <div class="page__actions">
                    <SearchInput
                        placeholder="Search services..."
                        on_change=Callback::new(move |text: String| {
                            controller.search(if text.is_empty() { None } else { Some(text) })
                        })
                    />
                    <select class="form__select" on:change=on_status_filter>
                        <option value="">"All statuses"</option>
                        <option value="ACTIVE">"Active"</option>
                        <option value="INACTIVE">"Inactive"</option>
                    </select>
                    <Button on_click=Callback::new(move |_| {
                        editing.set(None);
                        server_errors.set(FieldErrors::new());
                        set_sheet_open.set(true);
                    })>
                        {icon("plus")}
                        "New service"
                    </Button>
                </div>
            </div>

            {body}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|s| format!("Delete \"{}\"?", s.core.name))
                        .unwrap_or_else(|| messages::CONFIRM_DELETE_TITLE.to_string())
                })
                subtitle=messages::CONFIRM_DELETE_BODY.to_string()
                on_cancel=Callback::new(move |_| pending_delete.set(None))
                on_confirm=Callback::new(move |_| {
                    if let Some(service) = pending_delete.get_untracked() {
                        controller.delete(service.core.uuid);
                    }
                    pending_delete.set(None);
                })
            />

            <Show when=move || sheet_open.get()>
                <SideSheet
                    title=Signal::derive(move || {
                        if editing.get().is_some() {
                            "Edit service".to_string()
                        } else {
                            "New service".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| set_sheet_open.set(false))
                >
                    <ServiceDetails
                        initial=editing.get_untracked()
                        busy=saving
                        server_errors=server_errors
                        on_submit=handle_submit
                        on_cancel=Callback::new(move |_| set_sheet_open.set(false))
                    />
                </SideSheet>
            </Show>
        </div>
    }
}
