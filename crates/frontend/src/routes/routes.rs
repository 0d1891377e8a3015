use leptos::prelude::*;

use crate::layout::context::ScreenContext;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    provide_context(ScreenContext::new());

    view! { <Shell /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_auth();

    view! {
        <Show
            when=move || session.get().checked
            fallback=|| view! { <div class="app-splash">"Loading..."</div> }
        >
            <Show
                when=move || session.get().user.is_some()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
