use dioxus::prelude::*;
use reqwest::{RequestBuilder, StatusCode};
use shared_types::{AppError, Navigate, SessionService, ShellConfig, User};

use crate::routes::{route_for_path, Route};

/// Session service reached over HTTP.
///
/// `GET {api}/auth/me` answers 200 with the user or 401 when signed out;
/// `POST {api}/auth/logout` ends the session.
#[derive(Clone)]
pub struct HttpSessionService {
    client: reqwest::Client,
    config: ShellConfig,
}

impl HttpSessionService {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        with_credentials(self.client.get(self.config.endpoint(endpoint)))
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        with_credentials(self.client.post(self.config.endpoint(endpoint)))
    }
}

/// Send the session cookie along with cross-origin fetches.
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::network(err.to_string())
}

/// What a `/auth/me` status means for the session.
#[derive(Debug, PartialEq)]
enum MeStatus {
    SignedIn,
    SignedOut,
    Failed,
}

fn classify_me(status: StatusCode) -> MeStatus {
    if status.is_success() {
        MeStatus::SignedIn
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        MeStatus::SignedOut
    } else {
        MeStatus::Failed
    }
}

/// A 401 on logout means the session was already gone.
fn logout_succeeded(status: StatusCode) -> bool {
    status.is_success() || status == StatusCode::UNAUTHORIZED
}

impl SessionService for HttpSessionService {
    async fn current_user(&self) -> Result<Option<User>, AppError> {
        let response = self.get("auth/me").send().await.map_err(transport_error)?;
        let status = response.status();
        match classify_me(status) {
            MeStatus::SignedIn => response
                .json::<User>()
                .await
                .map(Some)
                .map_err(|e| AppError::invalid_response(e.to_string())),
            MeStatus::SignedOut => Ok(None),
            MeStatus::Failed => Err(AppError::internal(format!(
                "GET auth/me returned {status}"
            ))),
        }
    }

    async fn end_session(&self) -> Result<(), AppError> {
        let response = self
            .post("auth/logout")
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if logout_succeeded(status) {
            Ok(())
        } else {
            Err(AppError::internal(format!(
                "POST auth/logout returned {status}"
            )))
        }
    }
}

/// [`Navigate`] backed by the Dioxus router.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouterNavigator;

impl Navigate for RouterNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigate");
        navigator().push(route_for_path(path));
    }

    fn current_path(&self) -> String {
        router().current::<Route>().to_string()
    }
}
