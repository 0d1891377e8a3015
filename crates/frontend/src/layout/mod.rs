pub mod context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use self::context::{Screen, ScreenContext};
use self::header::Header;
use self::sidebar::Sidebar;
use crate::catalog::categories::ui::list::CategoriesPage;
use crate::catalog::materials::ui::list::MaterialsPage;
use crate::catalog::services::ui::list::ServicesPage;
use crate::catalog::trades::ui::list::TradesPage;
use crate::system::companies::ui::list::CompaniesPage;
use crate::system::roles::ui::list::RolesPage;
use crate::system::users::ui::list::UsersPage;

/// Authenticated frame: sidebar, topbar and the active screen.
#[component]
pub fn Shell() -> impl IntoView {
    let screens = use_context::<ScreenContext>().expect("ScreenContext not found in context");

    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Header />
                <main class="shell__content">
                    {move || match screens.active.get() {
                        Screen::Categories => view! { <CategoriesPage /> }.into_any(),
                        Screen::Trades => view! { <TradesPage /> }.into_any(),
                        Screen::Services => view! { <ServicesPage /> }.into_any(),
                        Screen::Materials => view! { <MaterialsPage /> }.into_any(),
                        Screen::Roles => view! { <RolesPage /> }.into_any(),
                        Screen::Users => view! { <UsersPage /> }.into_any(),
                        Screen::Companies => view! { <CompaniesPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
