use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let wrapper_class = if disabled {
        "form__checkbox-wrapper form__checkbox-wrapper--disabled"
    } else {
        "form__checkbox-wrapper"
    };

    view! {
        <label class=wrapper_class>
            <input
                type="checkbox"
                class="form__checkbox"
                checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
