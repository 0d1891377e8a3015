use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only when the session holds the given permission.
#[component]
pub fn RequirePermission(permission: &'static str, children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();

    view! {
        <Show
            when=move || {
                session
                    .get()
                    .user
                    .as_ref()
                    .map(|u| u.has_permission(permission))
                    .unwrap_or(false)
            }
            fallback=|| view! { <div class="page__denied">"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}
