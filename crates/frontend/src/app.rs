use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are app-global; every screen's controller reports through them.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
