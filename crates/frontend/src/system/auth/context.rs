use contracts::common::ApiError;
use contracts::system::auth::{LoginRequest, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session state resolved once at startup and kept in context; screens
/// read permissions from here instead of poking at storage.
#[derive(Clone, Debug, Default)]
pub struct AuthSession {
    pub user: Option<UserInfo>,
    /// The restore attempt has finished (successfully or not).
    pub checked: bool,
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(AuthSession::default());

    // Restore on mount: cookie presence first, then resolve the identity
    // and permission set from the backend.
    Effect::new(move |_| {
        spawn_local(async move {
            if !storage::has_session() {
                set_session.set(AuthSession {
                    user: None,
                    checked: true,
                });
                return;
            }
            // Show the cached identity right away; the fetch below
            // replaces it or tears the session down.
            if let Some(cached) = storage::cached_user() {
                set_session.set(AuthSession {
                    user: Some(cached),
                    checked: true,
                });
            }
            match api::get_current_user().await {
                Ok(user) => set_session.set(AuthSession {
                    user: Some(user),
                    checked: true,
                }),
                Err(err) => {
                    log::warn!("Session restore failed: {}", err);
                    storage::clear_session();
                    set_session.set(AuthSession {
                        user: None,
                        checked: true,
                    });
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthSession>, WriteSignal<AuthSession>) {
    let session = use_context::<ReadSignal<AuthSession>>()
        .expect("AuthProvider not found in component tree");
    let set_session = use_context::<WriteSignal<AuthSession>>()
        .expect("AuthProvider not found in component tree");
    (session, set_session)
}

pub async fn do_login(
    set_session: WriteSignal<AuthSession>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(&LoginRequest { username, password }).await?;
    storage::save_session(&response.token, &response.user);
    set_session.set(AuthSession {
        user: Some(response.user),
        checked: true,
    });
    Ok(())
}

pub async fn do_logout(set_session: WriteSignal<AuthSession>) {
    // Best effort; the session dies locally either way.
    if let Err(err) = api::logout().await {
        log::warn!("Logout call failed: {}", err);
    }
    storage::clear_session();
    set_session.set(AuthSession {
        user: None,
        checked: true,
    });
}
