// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted MoneyMate backend for deterministic HTTP tests.
//!
//! `MockBackend` wraps a wiremock server and mounts the auth routes most
//! tests need. Any other route can be mounted through [`MockBackend::server`].

use std::time::Duration;

use moneymate_config::model::{ApiConfig, MoneyMateConfig, StorageConfig};
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REFRESH_PATH: &str = "/api/auth/refresh";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const ME_PATH: &str = "/api/users/me";

/// A wiremock server speaking the MoneyMate API.
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// API settings pointing at this server.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.uri(),
            ..ApiConfig::default()
        }
    }

    /// Full config pointing at this server with an in-memory token store.
    pub fn config(&self) -> MoneyMateConfig {
        MoneyMateConfig {
            api: self.api_config(),
            storage: StorageConfig {
                in_memory: true,
                ..StorageConfig::default()
            },
            ..MoneyMateConfig::default()
        }
    }

    /// Login answers with `access`/`refresh`; the profile lookup that
    /// follows returns user `user_id`.
    pub async fn mount_sign_in(&self, access: &str, refresh: &str, user_id: i64) {
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::token_json(access, refresh)),
            )
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path(ME_PATH))
            .and(header("authorization", format!("Bearer {access}").as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::user_json(user_id, "ana@example.com")),
            )
            .mount(&self.server)
            .await;
    }

    /// Login rejected with the backend's detail message.
    pub async fn mount_sign_in_rejected(&self) {
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Incorrect email or password"
            })))
            .mount(&self.server)
            .await;
    }

    /// Refresh succeeds with the given pair after `delay`.
    pub async fn mount_refresh(&self, access: &str, refresh: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(REFRESH_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::token_json(access, refresh))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Refresh token no longer accepted.
    pub async fn mount_refresh_rejected(&self) {
        Mock::given(method("POST"))
            .and(path(REFRESH_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Invalid refresh token"
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_logout(&self) {
        Mock::given(method("POST"))
            .and(path(LOGOUT_PATH))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }

    /// `GET route` answers 401 for `stale` and `body` for `fresh`.
    pub async fn mount_protected(&self, route: &str, stale: &str, fresh: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", format!("Bearer {stale}").as_str()))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "detail": "Token expired"
            })))
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", format!("Bearer {fresh}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `verb route` answers `status` with a JSON body.
    pub async fn mount_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `verb route` answers `status` with no body.
    pub async fn mount_status(&self, verb: &str, route: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Every request received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|reqs| reqs.len())
            .unwrap_or_default()
    }

    /// Requests received for `route`, any method.
    pub async fn requests_to(&self, route: &str) -> usize {
        self.server
            .received_requests()
            .await
            .map(|reqs| reqs.iter().filter(|r| r.url.path() == route).count())
            .unwrap_or_default()
    }

    /// Bearer tokens sent to `route`, in arrival order.
    pub async fn bearers_sent_to(&self, route: &str) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == route)
            .filter_map(|r| r.headers.get("authorization"))
            .filter_map(|v| v.to_str().ok())
            .map(|v| v.trim_start_matches("Bearer ").to_string())
            .collect()
    }
}
