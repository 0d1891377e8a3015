use contracts::common::EntityStatus;
use leptos::prelude::*;

/// Colored pill for the active/inactive flag.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<EntityStatus>) -> impl IntoView {
    let badge_class = move || match status.get() {
        EntityStatus::Active => "badge badge--success",
        EntityStatus::Inactive => "badge badge--neutral",
    };

    view! { <span class=badge_class>{move || status.get().label()}</span> }
}
