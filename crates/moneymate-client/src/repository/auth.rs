// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sign-up, sign-in and sign-out.

use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::model::{SignUp, User};
use moneymate_core::{
    AuthRepository, Credentials, CredentialsUpdate, INVALID_CREDENTIALS, MoneyMateError, Outcome,
};
use tracing::{info, warn};

use crate::dto::{RegisterRequest, TokenResponse, UserDto};
use crate::http::{ApiRequest, AuthenticatedClient};

/// A 401 from the login endpoint means the email or password is wrong.
fn rejected_credentials(err: MoneyMateError) -> MoneyMateError {
    match err {
        MoneyMateError::Http { status: 401, .. } => MoneyMateError::Http {
            status: 401,
            message: INVALID_CREDENTIALS.into(),
        },
        other => other,
    }
}

pub struct HttpAuthRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpAuthRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn sign_up(&self, request: SignUp) -> Outcome<User> {
        let request = ApiRequest::post("/api/auth/register")
            .unauthenticated()
            .json(&RegisterRequest::from(request))?;
        let user: UserDto = self.client.fetch(request).await?;
        info!(user_id = %user.id, "account registered");
        Ok(user.into())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Outcome<Credentials> {
        let request = ApiRequest::post("/api/auth/login")
            .query("email", email)
            .query("password", password)
            .unauthenticated();
        let tokens: TokenResponse = self
            .client
            .fetch(request)
            .await
            .map_err(rejected_credentials)?;
        let access = tokens.access();

        // The login response carries no user id; ask for it with the new token
        // so the session is stored in one write.
        let user_id = match tokens.user_id.clone() {
            Some(id) => id,
            None => {
                let user: UserDto = self
                    .client
                    .send_with_token(&ApiRequest::get("/api/users/me"), &access)
                    .await?
                    .error_for_status()?
                    .json()?;
                user.id.to_string()
            }
        };

        let store = self.client.store();
        store
            .write(CredentialsUpdate::signed_in(
                access,
                tokens.refresh(),
                Some(user_id.clone()),
            ))
            .await?;
        info!(user_id = %user_id, "signed in");
        Ok(store.read())
    }

    async fn sign_out(&self) -> Outcome<()> {
        if self.client.store().read().is_signed_in()
            && let Err(e) = self.client.execute(ApiRequest::post("/api/auth/logout")).await
        {
            warn!(error = %e, "backend logout failed, clearing local session anyway");
        }
        self.client.store().clear().await?;
        info!("signed out");
        Ok(())
    }

    fn is_signed_in(&self) -> bool {
        self.client.store().read().is_signed_in()
    }

    fn current_user_id(&self) -> Option<String> {
        self.client.store().read().user_id
    }
}
