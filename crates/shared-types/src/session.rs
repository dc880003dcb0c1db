//! Seams to the collaborators the shell depends on but does not own: the
//! session service and the router.

use crate::error::AppError;
use crate::models::User;

/// Shown when the server could not end the session but the UI signed out anyway.
pub const SIGN_OUT_FAILED_NOTICE: &str =
    "Signed out locally; the server session could not be ended.";

/// Source of the authenticated user and owner of session termination.
#[allow(async_fn_in_trait)]
pub trait SessionService {
    /// The signed-in user, or `None` when there is no session.
    async fn current_user(&self) -> Result<Option<User>, AppError>;

    /// End the current session.
    async fn end_session(&self) -> Result<(), AppError>;
}

/// Client-side navigation.
pub trait Navigate {
    fn navigate(&self, path: &str);

    fn current_path(&self) -> String;
}

/// Fetch the current user for the shell. Failures are logged and treated as
/// "no user" so the shell still renders.
pub async fn load_current_user<S: SessionService>(service: &S) -> Option<User> {
    match service.current_user().await {
        Ok(user) => {
            tracing::info!(signed_in = user.is_some(), "session loaded");
            user
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load current user");
            None
        }
    }
}

/// End the session, clear local state, then go to the login page.
///
/// Navigation happens whether or not the server call succeeded, so the user
/// is never left looking at a half signed-out UI. The server result is
/// returned so the caller can tell the user about a failure.
pub async fn sign_out<S, N, F>(
    service: &S,
    navigator: &N,
    login_path: &str,
    clear_local: F,
) -> Result<(), AppError>
where
    S: SessionService,
    N: Navigate,
    F: FnOnce(),
{
    let result = service.end_session().await;
    match &result {
        Ok(()) => tracing::info!("session ended"),
        Err(err) => tracing::warn!(error = %err, "end_session failed; signing out locally"),
    }
    clear_local();
    navigator.navigate(login_path);
    result
}
