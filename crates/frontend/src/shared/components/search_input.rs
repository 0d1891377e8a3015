use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DEBOUNCE_MS: u32 = 300;

/// Debounced name filter with a clear button.
#[component]
pub fn SearchInput(
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let (value, set_value) = signal(String::new());
    // Monotonic token; only the latest pending edit fires the callback.
    let debounce_token = StoredValue::new(0u64);

    let handle_input = move |text: String| {
        set_value.set(text.clone());
        let token = debounce_token.get_value() + 1;
        debounce_token.set_value(token);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_token.get_value() == token {
                on_change.run(text);
            }
        });
    };

    let clear = move |_| {
        set_value.set(String::new());
        debounce_token.set_value(debounce_token.get_value() + 1);
        on_change.run(String::new());
    };

    let input_placeholder = move || placeholder.get().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="search-input">
            <span class="search-input__glyph">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=input_placeholder
                prop:value=move || value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="button button--icon search-input__clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
