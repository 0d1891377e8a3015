use contracts::catalog::service::{Service, ServiceDraft};
use contracts::common::validation::FieldErrors;
use contracts::common::EntityRef;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::trades::api as trades_api;
use crate::shared::components::ref_picker::RefPicker;
use crate::shared::components::ui::{Button, Input, Textarea};

#[component]
pub fn ServiceDetails(
    initial: Option<Service>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_errors: Signal<FieldErrors>,
    on_submit: Callback<ServiceDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(
        initial
            .as_ref()
            .map(|s| s.core.name.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        initial
            .as_ref()
            .map(|s| s.core.description.clone())
            .unwrap_or_default(),
    );
    let trade_ids: RwSignal<Vec<i64>> = RwSignal::new(
        initial
            .as_ref()
            .map(|s| s.trades.iter().map(|t| t.id).collect())
            .unwrap_or_default(),
    );
    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::new());

    let options: RwSignal<Vec<EntityRef>> = RwSignal::new(Vec::new());
    let (options_loading, set_options_loading) = signal(true);
    spawn_local(async move {
        match trades_api::fetch_active_refs().await {
            Ok(refs) => options.set(refs),
            Err(err) => log::warn!("Trade options fetch failed: {}", err),
        }
        set_options_loading.set(false);
    });

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            errors
                .with(|e| e.get(field).map(str::to_string))
                .or_else(|| server_errors.with(|e| e.get(field).map(str::to_string)))
        })
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ServiceDraft {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            trade_ids: trade_ids.get_untracked(),
        };
        match draft.validate() {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_submit.run(draft);
            }
            Err(validation_errors) => errors.set(validation_errors),
        }
    };

    view! {
        <form class="form" on:submit=handle_submit>
            {move || {
                server_errors.with(|e| {
                    e.get("_form")
                        .map(|m| view! { <div class="form__banner">{m.to_string()}</div> })
                })
            }}
            <Input
                label="Name"
                value=name
                on_input=Callback::new(move |text: String| name.set(text))
                error=field_error("name")
            />
            <Textarea
                label="Description"
                value=description
                on_input=Callback::new(move |text: String| description.set(text))
                error=field_error("description")
            />
            <RefPicker
                label="Trades".to_string()
                options=options
                selected=trade_ids
                loading=options_loading
                error=field_error("trade_ids")
            />
            <div class="form__actions">
                <Button button_type="submit" disabled=busy>
                    "Save"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}
