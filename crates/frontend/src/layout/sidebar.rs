use leptos::prelude::*;

use super::context::{Screen, ScreenContext, NAV_SCREENS};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Navigation rail. Items are filtered by the permission flags resolved
/// into the auth context at startup; nothing here re-reads storage.
#[component]
pub fn Sidebar() -> impl IntoView {
    let screens = use_context::<ScreenContext>().expect("ScreenContext not found in context");
    let (session, _) = use_auth();

    let visible = move || {
        let session = session.get();
        NAV_SCREENS
            .iter()
            .copied()
            .filter(|screen| {
                session
                    .user
                    .as_ref()
                    .map(|u| u.has_permission(screen.permission()))
                    .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                {icon("home")}
                <span>"Home Services"</span>
            </div>
            <ul class="sidebar__nav">
                <For
                    each=visible
                    key=|screen| *screen
                    children=move |screen: Screen| {
                        let item_class = move || {
                            if screens.active.get() == screen {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <li class=item_class on:click=move |_| screens.open(screen)>
                                {icon(screen.nav_icon())}
                                <span>{screen.title()}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </nav>
    }
}
