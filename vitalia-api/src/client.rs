use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use vitalia_auth::TokenStore;

use crate::endpoints::auth::{RefreshRequest, RefreshedSession};
use crate::error::ApiError;
use crate::request::{Endpoint, RequestData};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Refresh coordination state. The queue of blocked callers only exists while
/// an exchange is in flight; transitions happen under the lock, before any
/// await point.
enum RefreshState {
    Idle,
    Refreshing(Vec<oneshot::Sender<Result<String, ApiError>>>),
}

/// Client for the Vitalia REST backend.
///
/// Attaches the stored access token to every call, unwraps the `{ data: ... }`
/// response envelope, and normalizes all failures into [`ApiError`]. On an
/// authorization failure it exchanges the refresh token for a new access token
/// at most once per failure burst, queues concurrent callers behind the single
/// exchange, and replays each failed request once with the fresh token.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    refresh: Mutex<RefreshState>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl Client {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        let base_url: String = base_url.into();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            refresh: Mutex::new(RefreshState::Idle),
            on_session_expired: None,
        }
    }

    /// Registers a hook fired when the session is unrecoverable (the refresh
    /// exchange failed for good), so the host can force re-authentication.
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub async fn send<E: Endpoint>(&self, endpoint: E) -> Result<E::Response, ApiError> {
        let token = self.tokens.access_token();
        match self.dispatch(&endpoint, token.as_deref()).await {
            Err(err) if err.is_authorization() => {
                let token = self.refreshed_access_token().await?;
                debug!(path = %endpoint.path(), "replaying request with refreshed token");
                // A second authorization failure on the replay is final.
                self.dispatch(&endpoint, Some(&token)).await
            }
            other => other,
        }
    }

    async fn dispatch<E: Endpoint>(
        &self,
        endpoint: &E,
        token: Option<&str>,
    ) -> Result<E::Response, ApiError> {
        let path = endpoint.path();
        let mut request = self.http.request(E::METHOD, self.url(&path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request = match endpoint.data() {
            RequestData::Empty => request,
            RequestData::Query(query) => request.query(query),
            RequestData::Json(body) => request.json(body),
        };

        debug!(method = %E::METHOD, path = %path, "dispatching request");
        let response = request.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::transport)?;

        if !status.is_success() {
            let err = ApiError::from_status(status, &body);
            debug!(method = %E::METHOD, path = %path, status = status.as_u16(), error = %err.error, "request failed");
            return Err(err);
        }

        debug!(method = %E::METHOD, path = %path, status = status.as_u16(), "request succeeded");
        unwrap_envelope(status, &body)
    }

    /// Returns a fresh access token, starting the exchange if none is in
    /// flight and otherwise waiting on the one that is.
    async fn refreshed_access_token(&self) -> Result<String, ApiError> {
        let waiter = {
            let mut state = self.refresh.lock().expect("refresh state lock");
            match &mut *state {
                RefreshState::Refreshing(queue) => {
                    let (tx, rx) = oneshot::channel();
                    queue.push(tx);
                    Some(rx)
                }
                RefreshState::Idle => {
                    *state = RefreshState::Refreshing(Vec::new());
                    None
                }
            }
        };

        if let Some(rx) = waiter {
            debug!("token refresh already in flight, queuing request");
            return match rx.await {
                Ok(outcome) => outcome,
                Err(_) => Err(ApiError::refresh("Token refresh was abandoned")),
            };
        }

        let outcome = self.exchange_refresh_token().await;
        match &outcome {
            Ok(_) => debug!("token refresh succeeded"),
            Err(err) => {
                warn!("token refresh failed: {}", err);
                self.tokens.clear();
                if let Some(hook) = &self.on_session_expired {
                    hook();
                }
            }
        }

        let queued = {
            let mut state = self.refresh.lock().expect("refresh state lock");
            match std::mem::replace(&mut *state, RefreshState::Idle) {
                RefreshState::Refreshing(queue) => queue,
                RefreshState::Idle => Vec::new(),
            }
        };
        // Blocked callers resume in the order they were queued.
        for tx in queued {
            let _ = tx.send(outcome.clone());
        }

        outcome
    }

    /// The refresh call itself is never retried: a failed exchange means the
    /// session is unrecoverable without new user action.
    async fn exchange_refresh_token(&self) -> Result<String, ApiError> {
        let Some(refresh_token) = self.tokens.refresh_token() else {
            return Err(ApiError::refresh("No refresh token available"));
        };

        debug!("exchanging refresh token for a new access token");
        let response = self
            .http
            .post(self.url("/auth/refresh"))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await
            .map_err(|e| ApiError::refresh(format!("Token refresh failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::refresh(format!("Token refresh failed: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::refresh_status(status, &body));
        }

        let session: RefreshedSession =
            unwrap_envelope(status, &body).map_err(|e| ApiError::refresh(e.error))?;
        self.tokens
            .set_tokens(&session.access_token, session.refresh_token.as_deref());

        Ok(session.access_token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Successful bodies are either the payload itself or an envelope
/// `{ "data": <payload>, ... }`; callers always receive the payload.
fn unwrap_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    let value: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::decode(status, e))?
    };

    let payload = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| ApiError::decode(status, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_unwrapped() {
        let body = r#"{"data": {"id": 1}}"#;
        let value: Value = unwrap_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1}));
    }

    #[test]
    fn bare_body_passes_through() {
        let body = r#"{"id": 1}"#;
        let value: Value = unwrap_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1}));
    }

    #[test]
    fn empty_body_decodes_as_empty_response() {
        use crate::request::EmptyResponse;
        let _: EmptyResponse = unwrap_envelope(StatusCode::NO_CONTENT, "").unwrap();
        let _: EmptyResponse = unwrap_envelope(StatusCode::OK, r#"{"ok": true}"#).unwrap();
    }
}
