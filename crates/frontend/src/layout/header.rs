use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::ScreenContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let screens = use_context::<ScreenContext>().expect("ScreenContext not found in context");
    let (session, set_session) = use_auth();

    let display_name = move || {
        session
            .get()
            .user
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        spawn_local(async move {
            do_logout(set_session).await;
        });
    };

    view! {
        <header class="topbar">
            <h1 class="topbar__title">{move || screens.active.get().title()}</h1>
            <div class="topbar__user">
                <span class="topbar__name">{display_name}</span>
                <button class="button button--ghost" on:click=handle_logout>
                    {icon("log-out")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
