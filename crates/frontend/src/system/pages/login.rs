use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::messages;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_session) = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Enter your username and password".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            if let Err(err) = do_login(set_session, username_value, password_value).await {
                log::warn!("Login failed: {}", err);
                set_error.set(Some(messages::LOGIN_FAILED.to_string()));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login">
            <form class="login__card" on:submit=handle_submit>
                <div class="login__brand">
                    {icon("home")}
                    <h1>"Home Services Admin"</h1>
                </div>
                <Input
                    label="Username"
                    value=username
                    on_input=Callback::new(move |text: String| set_username.set(text))
                />
                <Input
                    label="Password"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |text: String| set_password.set(text))
                />
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="login__error">{message}</div> })
                }}
                <Button button_type="submit" disabled=submitting>
                    "Sign in"
                </Button>
            </form>
        </div>
    }
}
