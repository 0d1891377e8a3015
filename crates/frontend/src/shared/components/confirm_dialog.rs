use leptos::prelude::*;

/// Confirmation gate in front of destructive actions. Stateless: the
/// parent owns the `open` flag and performs the action itself after
/// `on_confirm` fires; cancelling only closes the dialog.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(optional, into)] confirm_label: MaybeProp<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_text = move || confirm_label.get().unwrap_or_else(|| "Delete".to_string());

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal modal--confirm" on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <p class="modal-subtitle">{move || subtitle.get()}</p>
                    <div class="modal-actions">
                        <button
                            class="button button--secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="button button--danger"
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_text}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
