use contracts::common::Pagination;
use leptos::prelude::*;

use crate::shared::messages;

/// "Load more" affordance under every list, driven by the pagination
/// metadata of the last response. Appends pages instead of refetching.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Number of rows currently on screen.
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] busy: Signal<bool>,
    on_load_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || format!("{} of {}", shown.get(), pagination.get().total)}
            </span>
            <Show when=move || pagination.get().has_more()>
                <button
                    class="button button--secondary"
                    disabled=move || busy.get()
                    on:click=move |_| on_load_more.run(())
                >
                    {messages::LOAD_MORE}
                </button>
            </Show>
        </div>
    }
}
