use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_query::{QueryOptions, use_query, use_query_client};
use crate::models::user::{Credentials, LoginOutcome, Session};
use crate::services::api::{self, fetch_session};
use crate::services::query_cache::QueryKey;

/// Progress of the caller's last login attempt.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoginStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    InvalidCredentials,
    Failed(String),
}

impl LoginStatus {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<&LoginOutcome> for LoginStatus {
    fn from(outcome: &LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Success(_) => Self::Succeeded,
            LoginOutcome::InvalidCredentials => Self::InvalidCredentials,
        }
    }
}

/// Handle returned by `use_auth` hook
#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    /// `None` until the first session lookup has answered
    pub session: Option<Session>,
    pub login_status: LoginStatus,
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
}

impl AuthHandle {
    pub fn is_authenticated(&self) -> Option<bool> {
        self.session.as_ref().map(Session::is_authenticated)
    }
}

/// Session state plus login and logout actions.
///
/// The session itself lives in the shared cache under [`QueryKey::User`], so
/// every caller sees the same value; `login_status` is per caller.
#[hook]
pub fn use_auth() -> AuthHandle {
    let client = use_query_client();
    let session = use_query(QueryKey::User, QueryOptions::default(), fetch_session);
    let login_status = use_state(LoginStatus::default);

    let login = {
        let client = client.clone();
        let login_status = login_status.clone();
        Callback::from(move |credentials: Credentials| {
            let client = client.clone();
            let login_status = login_status.clone();
            login_status.set(LoginStatus::Pending);

            spawn_local(async move {
                match api::login(credentials).await {
                    Ok(outcome) => {
                        client.apply_login(&outcome, Utc::now());
                        login_status.set(LoginStatus::from(&outcome));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "login failed");
                        login_status.set(LoginStatus::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    let logout = {
        let login_status = login_status.clone();
        Callback::from(move |()| {
            let client = client.clone();
            let login_status = login_status.clone();

            spawn_local(async move {
                match api::logout().await {
                    Ok(()) => {
                        client.apply_logout(Utc::now());
                        login_status.set(LoginStatus::Idle);
                    }
                    Err(e) => tracing::error!(error = %e, "logout failed"),
                }
            });
        })
    };

    AuthHandle {
        session: session.data,
        login_status: (*login_status).clone(),
        login,
        logout,
    }
}
