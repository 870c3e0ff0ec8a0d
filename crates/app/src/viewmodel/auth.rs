//! Authentication view model

use tracing::{info, warn};
use tripdesk_core::{Session, SessionStore};
use tripdesk_net::{session, TravelApi};

use crate::page::{Outcome, Page};

/// Shown after a successful registration
pub const REGISTERED_NOTICE: &str = "Registration successful! Please login.";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Result of the access gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    SignedIn(Session),
    /// No usable session; go here instead
    Redirect(Page),
}

impl AuthStatus {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthStatus::SignedIn(session) => Some(session),
            AuthStatus::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<Page> {
        match self {
            AuthStatus::SignedIn(_) => None,
            AuthStatus::Redirect(page) => Some(*page),
        }
    }
}

/// Log in; on success the session is stored and the user goes to the index
pub async fn submit_login<A, S>(api: &A, store: &S, form: &LoginForm) -> Outcome
where
    A: TravelApi + ?Sized,
    S: SessionStore + ?Sized,
{
    match session::login(api, store, &form.username, &form.password).await {
        Ok(_) => Outcome::navigate(Page::Index),
        Err(e) => Outcome::alert(e.to_string()),
    }
}

/// Register, then send the user to log in
pub async fn submit_register<A>(api: &A, form: &RegisterForm) -> Outcome
where
    A: TravelApi + ?Sized,
{
    match api
        .register(&form.username, &form.password, &form.email)
        .await
    {
        Ok(_) => {
            info!(username = %form.username, "Registered");
            Outcome::info(REGISTERED_NOTICE).then_navigate(Page::Login)
        }
        Err(e) => Outcome::alert(e.to_string()),
    }
}

/// Gate access on the stored session.
///
/// Never fails: an unreadable record counts as signed out and is cleared.
pub fn check_auth_status<S: SessionStore + ?Sized>(store: &S) -> AuthStatus {
    match store.load() {
        Ok(Some(session)) => AuthStatus::SignedIn(session),
        Ok(None) => AuthStatus::Redirect(Page::Login),
        Err(e) => {
            warn!(error = %e, "Discarding unreadable session");
            if let Err(e) = store.clear() {
                warn!(error = %e, "Failed to clear session");
            }
            AuthStatus::Redirect(Page::Login)
        }
    }
}

/// Forget the session and go to the login page, whatever the prior state
pub fn logout<S: SessionStore + ?Sized>(store: &S) -> Outcome {
    if let Err(e) = store.clear() {
        warn!(error = %e, "Failed to clear session");
    }
    info!("Logged out");
    Outcome::navigate(Page::Login)
}
