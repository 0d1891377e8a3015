pub mod view_model;

use contracts::catalog::category::{Category, CategoryDraft};
use contracts::common::validation::FieldErrors;
use contracts::common::ICON_SET;
use leptos::prelude::*;

use self::view_model::CategoryFormVm;
use crate::shared::color_utils::hex_to_rgba;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;

/// Category form used for both create and edit; `initial` decides the
/// mode. Validation runs on submit, the parent owns the network call and
/// hands server-side field errors back through `server_errors`.
#[component]
pub fn CategoryDetails(
    initial: Option<Category>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] server_errors: Signal<FieldErrors>,
    on_submit: Callback<CategoryDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryFormVm::new(initial.as_ref());

    let field_error = move |field: &'static str| {
        Signal::derive(move || {
            vm.errors
                .with(|e| e.get(field).map(str::to_string))
                .or_else(|| server_errors.with(|e| e.get(field).map(str::to_string)))
        })
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = vm.build_draft();
        match draft.validate() {
            Ok(()) => {
                vm.errors.set(FieldErrors::new());
                on_submit.run(draft);
            }
            Err(errors) => vm.errors.set(errors),
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
                value=vm.name
                on_input=Callback::new(move |text: String| vm.name.set(text))
                error=field_error("name")
            />
            <Textarea
                label="Description"
                value=vm.description
                on_input=Callback::new(move |text: String| vm.description.set(text))
                error=field_error("description")
            />
            <div class="form__group">
                <label class="form__label">"Icon"</label>
                <div class="icon-picker">
                    {ICON_SET
                        .iter()
                        .map(|&id| {
                            let item_class = move || {
                                if vm.icon.get() == id {
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
                                    on:click=move |_| vm.icon.set(id.to_string())
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
                <label class="form__label">"Color"</label>
                <div class="color-field">
                    <input
                        type="color"
                        class="color-field__input"
                        prop:value=move || vm.color.get()
                        on:input=move |ev| vm.color.set(event_target_value(&ev))
                    />
                    <span
                        class="color-field__preview"
                        style=move || format!("background: {};", hex_to_rgba(&vm.color.get(), 0.15))
                    >
                        {move || vm.color.get()}
                    </span>
                </div>
                {move || {
                    field_error("color")
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
