use contracts::common::validation::FieldErrors;
use contracts::common::ICON_SET;
use contracts::system::role::{Role, RoleDraft, PERMISSIONS};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::icons::icon;

#[component]
pub fn RoleDetails(
    initial: Option<Role>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_errors: Signal<FieldErrors>,
    on_submit: Callback<RoleDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(
        initial
            .as_ref()
            .map(|r| r.core.name.clone())
            .unwrap_or_default(),
    );
    let description = RwSignal::new(
        initial
            .as_ref()
            .map(|r| r.core.description.clone())
            .unwrap_or_default(),
    );
    let selected_icon = RwSignal::new(
        initial
            .as_ref()
            .map(|r| r.icon.clone())
            .unwrap_or_else(|| "shield".to_string()),
    );
    let permissions: RwSignal<Vec<String>> = RwSignal::new(
        initial
            .as_ref()
            .map(|r| r.permissions.clone())
            .unwrap_or_default(),
    );
    let errors: RwSignal<FieldErrors> = RwSignal::new(FieldErrors::new());

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            errors
                .with(|e| e.get(field).map(str::to_string))
                .or_else(|| server_errors.with(|e| e.get(field).map(str::to_string)))
        })
    };

    let toggle_permission = move |key: &'static str, granted: bool| {
        permissions.update(|list| {
            if granted {
                if !list.iter().any(|p| p == key) {
                    list.push(key.to_string());
                }
            } else {
                list.retain(|p| p != key);
            }
        });
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = RoleDraft {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            icon: selected_icon.get_untracked(),
            permissions: permissions.get_untracked(),
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
                <label class="form__label">"Icon"</label>
                <div class="icon-picker">
                    {ICON_SET
                        .iter()
                        .map(|&id| {
                            let item_class = move || {
                                if selected_icon.get() == id {
                                    "icon-picker__item icon-picker__item--selected"
                                } else {
                                    "icon-picker__item"
                                }
                            };
                            view! {
                                <button
                                    type="button"
                                    class=item_class
                                    title=id
                                    on:click=move |_| selected_icon.set(id.to_string())
                                >
                                    {icon(id)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    field_error("icon")
                        .get()
                        .map(|e| view! { <span class="form__error">{e}</span> })
                }}
            </div>
            <div class="form__group">
                <label class="form__label">"Permissions"</label>
                <div class="permission-list">
                    {PERMISSIONS
                        .iter()
                        .map(|&(key, label)| {
                            let checked =
                                Signal::derive(move || {
                                    permissions.get().iter().any(|p| p == key)
                                });
                            view! {
                                <Checkbox
                                    label=label.to_string()
                                    checked=checked
                                    on_change=Callback::new(move |granted: bool| {
                                        toggle_permission(key, granted)
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    field_error("permissions")
                        .get()
                        .map(|e| view! { <span class="form__error">{e}</span> })
                }}
            </div>
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
