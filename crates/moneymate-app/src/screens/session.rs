// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sign-in, sign-up and profile screens.

use std::future::ready;

use moneymate_core::model::User;
use moneymate_core::validation::{ProfileForm, SignInForm, SignUpForm};
use tracing::info;

use crate::container::Repositories;
use crate::state::{StateHolder, ViewState};
use crate::usecase::{
    DeleteAvatar, GetCurrentUser, Session, SignIn, SignOut, SignUp, UpdateProfile, UploadAvatar,
};

pub struct SignInScreen {
    sign_in: SignIn,
    state: StateHolder<Session>,
}

impl SignInScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            sign_in: SignIn::new(repos.auth.clone()),
            state: StateHolder::mutation("sign_in"),
        }
    }

    pub fn state(&self) -> &StateHolder<Session> {
        &self.state
    }

    pub async fn submit(&self, form: &SignInForm) -> ViewState<Session> {
        self.state.run(self.sign_in.execute(form)).await
    }
}

pub struct SignUpScreen {
    sign_up: SignUp,
    state: StateHolder<User>,
}

impl SignUpScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            sign_up: SignUp::new(repos.auth.clone()),
            state: StateHolder::mutation("sign_up"),
        }
    }

    pub fn state(&self) -> &StateHolder<User> {
        &self.state
    }

    pub async fn submit(&self, form: &SignUpForm) -> ViewState<User> {
        self.state.run(self.sign_up.execute(form)).await
    }
}

pub struct ProfileScreen {
    get_user: GetCurrentUser,
    update_profile: UpdateProfile,
    upload_avatar: UploadAvatar,
    delete_avatar: DeleteAvatar,
    sign_out: SignOut,
    user: StateHolder<User>,
    save: StateHolder<User>,
    signing_out: StateHolder<()>,
}

impl ProfileScreen {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_user: GetCurrentUser::new(repos.users.clone()),
            update_profile: UpdateProfile::new(repos.users.clone()),
            upload_avatar: UploadAvatar::new(repos.users.clone()),
            delete_avatar: DeleteAvatar::new(repos.users.clone()),
            sign_out: SignOut::new(repos.auth.clone()),
            user: StateHolder::loader("profile"),
            save: StateHolder::mutation("profile_save"),
            signing_out: StateHolder::mutation("sign_out"),
        }
    }

    pub fn user(&self) -> &StateHolder<User> {
        &self.user
    }

    pub fn save_state(&self) -> &StateHolder<User> {
        &self.save
    }

    pub fn sign_out_state(&self) -> &StateHolder<()> {
        &self.signing_out
    }

    pub async fn load(&self) -> ViewState<User> {
        self.user.run(self.get_user.execute()).await
    }

    pub async fn update(&self, form: &ProfileForm) -> ViewState<User> {
        let state = self.save.run(self.update_profile.execute(form)).await;
        self.show_saved(&state).await;
        state
    }

    pub async fn change_avatar(&self, file_name: &str, bytes: Vec<u8>) -> ViewState<User> {
        let state = self
            .save
            .run(self.upload_avatar.execute(file_name, bytes))
            .await;
        self.show_saved(&state).await;
        state
    }

    pub async fn remove_avatar(&self) -> ViewState<User> {
        let state = self.save.run(self.delete_avatar.execute()).await;
        self.show_saved(&state).await;
        state
    }

    pub async fn sign_out(&self) -> ViewState<()> {
        let state = self.signing_out.run(self.sign_out.execute()).await;
        if matches!(state, ViewState::Success(())) {
            self.user.reset();
            info!("profile cleared after sign-out");
        }
        state
    }

    /// The save response is the fresh profile; show it without refetching.
    async fn show_saved(&self, state: &ViewState<User>) {
        if let ViewState::Success(user) = state {
            self.user.reload(ready(Ok(user.clone()))).await;
        }
    }
}
