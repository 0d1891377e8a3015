use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::shared::icons::icon;

/// Slide-in panel hosting the create/edit forms. The parent mounts it
/// conditionally; Escape and the overlay close it.
#[component]
pub fn SideSheet(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="sheet-overlay" on:click=move |_| on_close.run(())>
            <aside class="sheet" on:click=stop_propagation>
                <div class="sheet__header">
                    <h2 class="sheet__title">{move || title.get()}</h2>
                    <button
                        class="button button--icon sheet__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="sheet__body">{children()}</div>
            </aside>
        </div>
    }
}
