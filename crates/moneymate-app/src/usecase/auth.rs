// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session and profile actions.

use std::sync::Arc;

use moneymate_core::model::User;
use moneymate_core::validation::{self, ProfileForm, SignInForm, SignUpForm};
use moneymate_core::{AuthRepository, Credentials, Outcome, UserRepository};
use serde::Serialize;

use super::rejected;

/// Public view of the stored session; tokens stay inside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub signed_in: bool,
    pub user_id: Option<String>,
}

impl From<&Credentials> for Session {
    fn from(creds: &Credentials) -> Self {
        Self {
            signed_in: creds.is_signed_in(),
            user_id: creds.user_id.clone(),
        }
    }
}

pub struct SignIn {
    repo: Arc<dyn AuthRepository>,
}

impl SignIn {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &SignInForm) -> Outcome<Session> {
        let (email, password) = form.validate().map_err(|e| rejected("sign_in", e))?;
        let creds = self.repo.sign_in(&email, &password).await?;
        Ok(Session::from(&creds))
    }
}

pub struct SignUp {
    repo: Arc<dyn AuthRepository>,
}

impl SignUp {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &SignUpForm) -> Outcome<User> {
        let request = form.validate().map_err(|e| rejected("sign_up", e))?;
        self.repo.sign_up(request).await
    }
}

delegating_use_case!(
    /// Ends the session; local credentials are always cleared.
    SignOut => AuthRepository::sign_out() -> ()
);

/// Reads the session from the token store without a network call.
pub struct CurrentSession {
    repo: Arc<dyn AuthRepository>,
}

impl CurrentSession {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> Session {
        Session {
            signed_in: self.repo.is_signed_in(),
            user_id: self.repo.current_user_id(),
        }
    }
}

delegating_use_case!(GetCurrentUser => UserRepository::get_current_user() -> User);
delegating_use_case!(DeleteAvatar => UserRepository::delete_avatar() -> User);

pub struct UpdateProfile {
    repo: Arc<dyn UserRepository>,
}

impl UpdateProfile {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &ProfileForm) -> Outcome<User> {
        let update = form.validate().map_err(|e| rejected("update_profile", e))?;
        self.repo.update_user(update).await
    }
}

pub struct UploadAvatar {
    repo: Arc<dyn UserRepository>,
}

impl UploadAvatar {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Only JPG, PNG and GIF images up to 5 MB are sent.
    pub async fn execute(&self, file_name: &str, bytes: Vec<u8>) -> Outcome<User> {
        let avatar =
            validation::avatar(file_name, bytes).map_err(|e| rejected("upload_avatar", e))?;
        self.repo.upload_avatar(avatar).await
    }
}
