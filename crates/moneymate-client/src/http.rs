// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authenticated HTTP client for the MoneyMate backend.
//!
//! [`AuthenticatedClient`] attaches the stored bearer token, and on a 401
//! refreshes it under a single-flight lock before retrying the request once.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moneymate_config::model::ApiConfig;
use moneymate_core::{
    CredentialsUpdate, ErrorKind, MoneyMateError, Outcome, Token, TokenStore,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::dto::{RefreshRequest, TokenResponse};

/// A request relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Sent as a single-part `multipart/form-data` body instead of `body`.
    pub file: Option<FilePart>,
    /// Whether the stored bearer token is attached and 401s trigger a refresh.
    pub authenticated: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            file: None,
            authenticated: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body. Serialization failures surface as `Decode`.
    pub fn json<T: Serialize>(mut self, body: &T) -> Outcome<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| MoneyMateError::decode("failed to encode request body", e))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Attach a file as the form field `field`.
    pub fn file(mut self, file: FilePart) -> Self {
        self.file = Some(file);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Send without a bearer token and without refresh handling.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

/// One file in a `multipart/form-data` body.
///
/// Kept as owned bytes so a request can be replayed after a token refresh.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Status and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// FastAPI error envelope. `detail` is a string or a list of field errors.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Map a non-2xx response to `Http { status, message }`.
    pub fn error_for_status(self) -> Outcome<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(MoneyMateError::Http {
            status: self.status,
            message: self.error_message(),
        })
    }

    /// Server-supplied error text, falling back to the status reason.
    pub fn error_message(&self) -> String {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&self.body) {
            if let Some(detail) = body.detail.as_ref().and_then(detail_text) {
                return detail;
            }
            if let Some(message) = body.message.filter(|m| !m.is_empty()) {
                return message;
            }
        }
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("unexpected status")
            .to_string()
    }

    /// Decode the body. A blank body is `EmptyResponse`.
    pub fn json<T: DeserializeOwned>(&self) -> Outcome<T> {
        if self.body.trim().is_empty() {
            return Err(MoneyMateError::EmptyResponse);
        }
        serde_json::from_str(&self.body)
            .map_err(|e| MoneyMateError::decode("failed to decode response body", e))
    }
}

fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(|loc| loc.as_array())
                        .and_then(|loc| loc.last())
                        .and_then(|f| f.as_str());
                    Some(match field {
                        Some(field) => format!("{field}: {msg}"),
                        None => msg.to_string(),
                    })
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// A refresh attempt that failed without changing the token store.
///
/// Requests that were already waiting when it failed receive a copy instead
/// of starting their own attempt.
#[derive(Debug, Clone)]
struct RefreshFailure {
    epoch: u64,
    kind: ErrorKind,
    message: String,
}

impl RefreshFailure {
    fn new(epoch: u64, err: &MoneyMateError) -> Self {
        let message = match err {
            MoneyMateError::Network { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self {
            epoch,
            kind: err.kind(),
            message,
        }
    }

    fn to_error(&self) -> MoneyMateError {
        match self.kind {
            ErrorKind::Network => MoneyMateError::Network {
                message: self.message.clone(),
                source: None,
            },
            ErrorKind::AuthExpired => MoneyMateError::AuthExpired,
            ErrorKind::Storage => MoneyMateError::Storage {
                source: Box::new(std::io::Error::other(self.message.clone())),
            },
            _ => MoneyMateError::Internal(self.message.clone()),
        }
    }
}

/// HTTP client bound to one backend and one token store.
pub struct AuthenticatedClient {
    http: reqwest::Client,
    base_url: String,
    refresh_path: String,
    store: Arc<dyn TokenStore>,
    /// Number of refresh attempts that have settled, successful or not.
    refresh_epoch: AtomicU64,
    /// Held for the whole refresh; remembers the last failed attempt.
    refresh_lock: Mutex<Option<RefreshFailure>>,
}

impl AuthenticatedClient {
    /// Builds a client with the configured timeouts.
    pub fn from_config(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Outcome<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| MoneyMateError::network("failed to build HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            refresh_path: config.refresh_path.clone(),
            store,
            refresh_epoch: AtomicU64::new(0),
            refresh_lock: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Send a request, refreshing the session at most once on a 401.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    pub async fn send(&self, request: &ApiRequest) -> Outcome<ApiResponse> {
        if !request.authenticated {
            return self.dispatch(request, None).await;
        }

        let epoch = self.refresh_epoch.load(Ordering::SeqCst);
        let token = self.store.read().access_token;
        let response = self.dispatch(request, token.as_ref()).await?;
        if response.status != StatusCode::UNAUTHORIZED.as_u16() {
            return Ok(response);
        }

        let fresh = self.refresh_after(token.as_ref(), epoch).await?;
        debug!(path = %request.path, "retrying with refreshed token");
        self.dispatch(request, Some(&fresh)).await
    }

    /// Send once with an explicit bearer token, bypassing the store.
    pub async fn send_with_token(
        &self,
        request: &ApiRequest,
        token: &Token,
    ) -> Outcome<ApiResponse> {
        self.dispatch(request, Some(token)).await
    }

    /// Send and decode a 2xx JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Outcome<T> {
        self.send(&request).await?.error_for_status()?.json()
    }

    /// Send and require a 2xx status; the body is ignored.
    pub async fn execute(&self, request: ApiRequest) -> Outcome<()> {
        self.send(&request).await?.error_for_status()?;
        Ok(())
    }

    /// Obtain a token newer than `stale`, refreshing if nobody else has.
    ///
    /// `epoch` is the number of settled refreshes when the caller's request
    /// went out. A failure recorded after that point is returned as is.
    async fn refresh_after(&self, stale: Option<&Token>, epoch: u64) -> Outcome<Token> {
        let mut last_failure = self.refresh_lock.lock().await;

        if let Some(failure) = last_failure.as_ref()
            && failure.epoch > epoch
        {
            debug!(kind = %failure.kind, "sharing the outcome of a failed refresh");
            return Err(failure.to_error());
        }

        let outcome = self.refresh_locked(stale).await;
        if let Err(err) = &outcome {
            let settled = self.refresh_epoch.fetch_add(1, Ordering::SeqCst) + 1;
            *last_failure = Some(RefreshFailure::new(settled, err));
        }
        outcome
    }

    /// Body of [`Self::refresh_after`]; runs with the refresh lock held.
    async fn refresh_locked(&self, stale: Option<&Token>) -> Outcome<Token> {
        let current = self.store.read();
        if let Some(access) = current.access_token.as_ref()
            && Some(access) != stale
        {
            debug!("access token already refreshed by another request");
            return Ok(access.clone());
        }
        if current.is_empty() {
            return Err(MoneyMateError::AuthExpired);
        }
        let Some(refresh_token) = current.refresh_token else {
            warn!("no refresh token available, signing out");
            self.store.clear().await?;
            return Err(MoneyMateError::AuthExpired);
        };

        let request = ApiRequest::post(self.refresh_path.clone())
            .unauthenticated()
            .json(&RefreshRequest {
                refresh_token: refresh_token.expose(),
            })?;
        let response = self.dispatch(&request, None).await?;

        if !response.is_success() {
            warn!(status = response.status, "token refresh rejected, signing out");
            self.store.clear().await?;
            return Err(MoneyMateError::AuthExpired);
        }
        let tokens: TokenResponse = match response.json() {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "token refresh returned an unusable body, signing out");
                self.store.clear().await?;
                return Err(MoneyMateError::AuthExpired);
            }
        };

        let access = tokens.access();
        self.store
            .write(CredentialsUpdate::rotated(access.clone(), tokens.refresh()))
            .await?;
        self.refresh_epoch.fetch_add(1, Ordering::SeqCst);
        info!("access token refreshed");
        Ok(access)
    }

    async fn dispatch(&self, request: &ApiRequest, token: Option<&Token>) -> Outcome<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let url = reqwest::Url::parse_with_params(&url, &request.query)
            .map_err(|e| MoneyMateError::Internal(format!("invalid request URL: {e}")))?;

        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(file) = &request.file {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .map_err(|e| MoneyMateError::Internal(format!("invalid upload content type: {e}")))?;
            builder = builder.multipart(Form::new().part(file.field.clone(), part));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| MoneyMateError::network(format!("request to {} failed", request.path), e))?;
        let status = response.status();
        debug!(method = %request.method, path = %request.path, status = %status, "response received");

        let body = response
            .text()
            .await
            .map_err(|e| MoneyMateError::network("failed to read response body", e))?;
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneymate_core::Credentials;
    use moneymate_storage::MemoryTokenStore;
    use tracing_test::traced_test;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_in_store() -> Arc<MemoryTokenStore> {
        Arc::new(MemoryTokenStore::with_credentials(Credentials {
            access_token: Some(Token::new("AT1")),
            refresh_token: Some(Token::new("RT1")),
            user_id: Some("7".into()),
        }))
    }

    fn test_client(server: &MockServer, store: Arc<MemoryTokenStore>) -> AuthenticatedClient {
        let config = ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        };
        AuthenticatedClient::from_config(&config, store).unwrap()
    }

    #[tokio::test]
    async fn attaches_bearer_and_accept_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/wallets/"))
            .and(header("authorization", "Bearer AT1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, signed_in_store());
        let response = client.send(&ApiRequest::get("/api/wallets/")).await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn unauthenticated_request_has_no_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = test_client(&server, signed_in_store());
        client
            .send(&ApiRequest::post("/api/auth/register").unauthenticated())
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(received[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn refreshes_once_and_retries_with_new_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/budget/current"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .and(body_json(serde_json::json!({"refresh_token": "RT1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "AT2", "refresh_token": "RT2"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/budget/current"))
            .and(header("authorization", "Bearer AT2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let store = signed_in_store();
        let client = test_client(&server, store.clone());
        let response = client
            .send(&ApiRequest::get("/api/budget/current"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let creds = store.read();
        assert_eq!(creds.access_token, Some(Token::new("AT2")));
        assert_eq!(creds.refresh_token, Some(Token::new("RT2")));
        assert_eq!(creds.user_id.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn file_upload_is_resent_after_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/me/avatar"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "AT2", "refresh_token": "RT2"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/users/me/avatar"))
            .and(header("authorization", "Bearer AT2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, signed_in_store());
        let request = ApiRequest::post("/api/users/me/avatar").file(FilePart {
            field: "file".into(),
            file_name: "me.png".into(),
            content_type: "image/png".into(),
            bytes: b"PNGDATA".to_vec(),
        });
        let response = client.send(&request).await.unwrap();
        assert_eq!(response.status, 200);

        let requests = server.received_requests().await.unwrap();
        let uploads: Vec<_> = requests
            .iter()
            .filter(|r| r.url.path() == "/api/users/me/avatar")
            .collect();
        assert_eq!(uploads.len(), 2);
        for upload in uploads {
            let content_type = upload.headers.get("content-type").unwrap().to_str().unwrap();
            assert!(content_type.starts_with("multipart/form-data"));
            let body = String::from_utf8_lossy(&upload.body);
            assert!(body.contains(r#"name="file"; filename="me.png""#));
            assert!(body.contains("PNGDATA"));
        }
    }

    #[test]
    fn file_part_debug_omits_contents() {
        let part = FilePart {
            field: "file".into(),
            file_name: "me.png".into(),
            content_type: "image/png".into(),
            bytes: b"secret pixels".to_vec(),
        };
        let shown = format!("{part:?}");
        assert!(shown.contains("len: 13"));
        assert!(!shown.contains("115"));
    }

    #[tokio::test]
    #[traced_test]
    async fn refresh_is_logged_without_token_values() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags/"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tags/"))
            .and(header("authorization", "Bearer AT2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"access_token": "AT2", "refresh_token": "RT2"}),
            ))
            .mount(&server)
            .await;

        let client = test_client(&server, signed_in_store());
        client.send(&ApiRequest::get("/api/tags/")).await.unwrap();

        assert!(logs_contain("access token refreshed"));
        assert!(!logs_contain("RT1"));
        assert!(!logs_contain("AT2"));
    }

    #[tokio::test]
    async fn second_401_is_returned_without_another_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/goals"))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "AT2"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, signed_in_store());
        let response = client.send(&ApiRequest::get("/api/goals")).await.unwrap();
        assert_eq!(response.status, 401);
        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn rejected_refresh_clears_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let store = signed_in_store();
        let client = test_client(&server, store.clone());
        let err = client.send(&ApiRequest::get("/api/tags/")).await.unwrap_err();

        assert!(matches!(err, MoneyMateError::AuthExpired));
        assert!(store.read().is_empty());
    }

    #[tokio::test]
    async fn garbage_refresh_body_clears_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let store = signed_in_store();
        let client = test_client(&server, store.clone());
        let err = client.send(&ApiRequest::get("/api/tags/")).await.unwrap_err();
        assert!(matches!(err, MoneyMateError::AuthExpired));
        assert!(store.read().is_empty());
    }

    #[tokio::test]
    async fn missing_refresh_token_signs_out_without_calling_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryTokenStore::with_credentials(Credentials {
            access_token: Some(Token::new("AT1")),
            refresh_token: None,
            user_id: Some("7".into()),
        }));
        let client = test_client(&server, store.clone());
        let err = client.send(&ApiRequest::get("/api/tags/")).await.unwrap_err();
        assert!(matches!(err, MoneyMateError::AuthExpired));
        assert!(store.read().is_empty());
    }

    #[tokio::test]
    async fn concurrent_401s_share_one_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/wallets/"))
            .and(header("authorization", "Bearer AT1"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/wallets/"))
            .and(header("authorization", "Bearer AT2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "AT2"}))
                    .set_delay(std::time::Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(test_client(&server, signed_in_store()));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let client = Arc::clone(&client);
            handles.push(tokio::spawn(async move {
                client.send(&ApiRequest::get("/api/wallets/")).await
            }));
        }
        for handle in handles {
            let response = handle.await.unwrap().unwrap();
            assert_eq!(response.status, 200);
        }
    }

    fn impatient_client(server: &MockServer, store: Arc<MemoryTokenStore>) -> AuthenticatedClient {
        let config = ApiConfig {
            base_url: server.uri(),
            request_timeout_secs: 1,
            ..ApiConfig::default()
        };
        AuthenticatedClient::from_config(&config, store).unwrap()
    }

    async fn mount_stalled_refresh(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/wallets/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "AT2"}))
                    .set_delay(std::time::Duration::from_millis(1500)),
            )
            .mount(server)
            .await;
    }

    async fn refresh_requests(server: &MockServer) -> usize {
        server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.url.path() == "/api/auth/refresh")
            .count()
    }

    #[tokio::test]
    async fn refresh_timeout_keeps_credentials() {
        let server = MockServer::start().await;
        mount_stalled_refresh(&server).await;

        let store = signed_in_store();
        let client = impatient_client(&server, store.clone());
        let err = client.send(&ApiRequest::get("/api/wallets/")).await.unwrap_err();

        assert!(matches!(err, MoneyMateError::Network { .. }));
        let creds = store.read();
        assert_eq!(creds.access_token, Some(Token::new("AT1")));
        assert_eq!(creds.refresh_token, Some(Token::new("RT1")));
        assert_eq!(creds.user_id.as_deref(), Some("7"));

        // A request issued after the failure may try again.
        let err = client.send(&ApiRequest::get("/api/wallets/")).await.unwrap_err();
        assert!(matches!(err, MoneyMateError::Network { .. }));
        assert_eq!(refresh_requests(&server).await, 2);
    }

    #[tokio::test]
    async fn concurrent_401s_share_a_timed_out_refresh() {
        let server = MockServer::start().await;
        mount_stalled_refresh(&server).await;

        let store = signed_in_store();
        let client = Arc::new(impatient_client(&server, store.clone()));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let client = Arc::clone(&client);
            handles.push(tokio::spawn(async move {
                client.send(&ApiRequest::get("/api/wallets/")).await
            }));
        }
        for handle in handles {
            let err = handle.await.unwrap().unwrap_err();
            assert!(matches!(err, MoneyMateError::Network { .. }));
        }

        assert_eq!(refresh_requests(&server).await, 1);
        assert!(store.read().is_signed_in());
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..ApiConfig::default()
        };
        let client = AuthenticatedClient::from_config(&config, signed_in_store()).unwrap();
        let err = client.send(&ApiRequest::get("/api/wallets/")).await.unwrap_err();
        assert!(matches!(err, MoneyMateError::Network { .. }));
    }

    #[test]
    fn error_message_prefers_detail() {
        let response = ApiResponse {
            status: 400,
            body: r#"{"detail":"Wallet with name 'Cash' already exists"}"#.into(),
        };
        assert_eq!(
            response.error_message(),
            "Wallet with name 'Cash' already exists"
        );
    }

    #[test]
    fn error_message_flattens_validation_details() {
        let response = ApiResponse {
            status: 422,
            body: r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email","type":"value_error"}]}"#.into(),
        };
        assert_eq!(response.error_message(), "email: value is not a valid email");
    }

    #[test]
    fn error_message_falls_back_to_reason() {
        let response = ApiResponse {
            status: 503,
            body: "<html>down</html>".into(),
        };
        assert_eq!(response.error_message(), "Service Unavailable");
    }

    #[test]
    fn blank_success_body_is_empty_response() {
        let response = ApiResponse {
            status: 200,
            body: "  ".into(),
        };
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, MoneyMateError::EmptyResponse));
    }

    #[test]
    fn query_parameters_are_collected() {
        let request = ApiRequest::post("/api/auth/login")
            .query("email", "a@b.co")
            .query("password", "secret")
            .unauthenticated();
        assert_eq!(request.query.len(), 2);
        assert!(!request.authenticated);
    }
}
