use contracts::common::validation::FieldErrors;
use contracts::system::company::{Company, CompanyDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::shared::components::toast::ToastService;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::shared::uploads::upload_file;

#[component]
pub fn CompanyDetails(
    initial: Option<Company>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_errors: Signal<FieldErrors>,
    on_submit: Callback<CompanyDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = ToastService::expect_in_context();

    let name = RwSignal::new(
        initial
            .as_ref()
            .map(|c| c.core.name.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        initial
            .as_ref()
            .map(|c| c.core.description.clone())
            .unwrap_or_default(),
    );
    let logo_url: RwSignal<Option<String>> =
        RwSignal::new(initial.as_ref().and_then(|c| c.logo_url.clone()));
    let (uploading, set_uploading) = signal(false);
    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::new());

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            errors
                .with(|e| e.get(field).map(str::to_string))
                .or_else(|| server_errors.with(|e| e.get(field).map(str::to_string)))
        })
    };

    let handle_logo_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_uploading.set(true);
        spawn_local(async move {
            match upload_file(file, "company-logo").await {
                Ok(public_url) => logo_url.set(Some(public_url)),
                Err(err) => {
                    log::warn!("Logo upload failed: {}", err);
                    toasts.error(messages::UPLOAD_FAILED);
                }
            }
            set_uploading.set(false);
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || uploading.get_untracked() {
            return;
        }
        let draft = CompanyDraft {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            logo_url: logo_url.get_untracked(),
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
            <div class="form__group">
                <label class="form__label">"Logo"</label>
                {move || {
                    logo_url
                        .get()
                        .map(|url| view! { <img class="logo-preview" src=url alt="Company logo" /> })
                }}
                <label class="button button--secondary file-trigger">
                    {icon("upload")}
                    {move || if uploading.get() { "Uploading..." } else { "Upload logo" }}
                    <input
                        type="file"
                        class="file-trigger__input"
                        accept="image/*"
                        disabled=move || uploading.get()
                        on:change=handle_logo_change
                    />
                </label>
            </div>
            <div class="form__actions">
                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || busy.get() || uploading.get())
                >
                    "Save"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}
