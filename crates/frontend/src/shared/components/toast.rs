//! App-wide toast notifications. The service lives in context (provided
//! by `App`) and the host renders the queue in a fixed corner stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn expect_in_context() -> Self {
        use_context::<ToastService>().expect("ToastService not provided in context")
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into());
    }

    fn push(&self, level: ToastLevel, text: String) {
        let id = self.next_id.try_update(|n| {
            let id = *n;
            *n += 1;
            id
        });
        let Some(id) = id else { return };
        let _ = self.toasts.try_update(|t| t.push(Toast { id, level, text }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            let _ = toasts.try_update(|t| t.retain(|toast| toast.id != id));
        });
    }

    fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = ToastService::expect_in_context();
    let toasts = service.toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let level_class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=level_class on:click=move |_| service.dismiss(id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
