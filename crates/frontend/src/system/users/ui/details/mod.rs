use contracts::common::validation::FieldErrors;
use contracts::common::EntityRef;
use contracts::system::user::{User, UserDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::system::roles::api as roles_api;

#[component]
pub fn UserDetails(
    initial: Option<User>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_errors: Signal<FieldErrors>,
    on_submit: Callback<UserDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_create = initial.is_none();

    let username = RwSignal::new(
        initial
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default(),
    );
    let email = RwSignal::new(initial.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let full_name = RwSignal::new(
        initial
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let role_id = RwSignal::new(
        initial
            .as_ref()
            .map(|u| u.role.id.to_string())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let is_active = RwSignal::new(initial.as_ref().map(|u| u.is_active).unwrap_or(true));
    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::new());

    let role_options: RwSignal<Vec<(String, String)>> = RwSignal::new(Vec::new());
    spawn_local(async move {
        match roles_api::fetch_active_refs().await {
            Ok(refs) => {
                role_options.set(
                    refs.into_iter()
                        .map(|r: EntityRef| (r.id.to_string(), r.name))
                        .collect(),
                );
            }
            Err(err) => log::warn!("Role options fetch failed: {}", err),
        }
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
        let full_name_value = full_name.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let draft = UserDraft {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            full_name: if full_name_value.is_empty() {
                None
            } else {
                Some(full_name_value)
            },
            role_id: role_id.get_untracked().parse().unwrap_or(0),
            password: if password_value.is_empty() {
                None
            } else {
                Some(password_value)
            },
            is_active: is_active.get_untracked(),
        };
        match draft.validate(is_create) {
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
                label="Username"
                value=username
                disabled=!is_create
                on_input=Callback::new(move |text: String| username.set(text))
                error=field_error("username")
            />
            <Input
                label="Email"
                input_type="email"
                value=email
                on_input=Callback::new(move |text: String| email.set(text))
                error=field_error("email")
            />
            <Input
                label="Full name"
                value=full_name
                on_input=Callback::new(move |text: String| full_name.set(text))
                error=field_error("full_name")
            />
            <Select
                label="Role"
                value=role_id
                options=role_options
                on_change=Callback::new(move |value: String| role_id.set(value))
                error=field_error("role_id")
            />
            <Show when=move || is_create>
                <Input
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |text: String| password.set(text))
                    error=field_error("password")
                />
            </Show>
            <Checkbox
                label="Active".to_string()
                checked=is_active
                on_change=Callback::new(move |checked: bool| is_active.set(checked))
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
