// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `login`, `register`, `logout`, `whoami`, `profile` and `avatar` commands.

use std::io::IsTerminal;
use std::path::PathBuf;

use moneymate_app::{AppContainer, ViewState};
use moneymate_core::validation::{SignInForm, SignUpForm};
use moneymate_core::{MoneyMateError, Outcome};

use crate::output::Output;

/// Environment variable read before prompting for a password.
pub const PASSWORD_ENV_VAR: &str = "MONEYMATE_PASSWORD";

/// Password from `MONEYMATE_PASSWORD`, or an interactive prompt on a TTY.
pub fn read_password(prompt: &str) -> Outcome<String> {
    if let Ok(password) = std::env::var(PASSWORD_ENV_VAR)
        && !password.is_empty()
    {
        return Ok(password);
    }

    if std::io::stdin().is_terminal() {
        eprint!("{prompt}: ");
        return rpassword::read_password()
            .map_err(|e| MoneyMateError::Internal(format!("failed to read password: {e}")));
    }

    Err(MoneyMateError::Config(format!(
        "no password provided. Set {PASSWORD_ENV_VAR} or run interactively"
    )))
}

pub async fn run_login(container: &AppContainer, out: &Output, email: String) -> Outcome<bool> {
    let form = SignInForm {
        email,
        password: read_password("Password")?,
    };
    let state = container.sign_in_screen().submit(&form).await;
    Ok(out.state("login", &state, |out, session| {
        out.line(out.ok("signed in"));
        if let Some(user_id) = &session.user_id {
            out.row("User id", user_id);
        }
    }))
}

pub struct Registration {
    pub email: String,
    pub full_name: String,
    pub currency: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
}

pub async fn run_register(
    container: &AppContainer,
    out: &Output,
    registration: Registration,
) -> Outcome<bool> {
    let form = SignUpForm {
        full_name: registration.full_name,
        email: registration.email,
        password: read_password("Choose a password")?,
        default_currency: registration
            .currency
            .unwrap_or_else(|| container.default_currency().to_string()),
        phone_number: registration.phone_number,
        date_of_birth: registration.date_of_birth,
    };
    let state = container.sign_up_screen().submit(&form).await;
    Ok(out.state("register", &state, |out, user| {
        out.line(out.ok("account created"));
        out.row("Email", &user.email);
        out.line("Sign in with: moneymate login --email <email>");
    }))
}

pub async fn run_logout(container: &AppContainer, out: &Output) -> bool {
    let state = container.profile_screen().sign_out().await;
    out.state("logout", &state, |out, ()| out.line(out.ok("signed out")))
}

/// Reads the stored session only.
pub fn run_whoami(container: &AppContainer, out: &Output) -> bool {
    let state = ViewState::Success(container.session());
    out.state("whoami", &state, |out, session| {
        if session.signed_in {
            out.row("Signed in", "yes");
            out.row("User id", session.user_id.as_deref().unwrap_or("unknown"));
        } else {
            out.row("Signed in", "no");
        }
    })
}

pub async fn run_profile(container: &AppContainer, out: &Output) -> bool {
    let state = container.profile_screen().load().await;
    out.state("profile", &state, |out, user| {
        out.row("Id", user.id);
        out.row("Email", &user.email);
        out.row("Name", user.full_name.as_deref().unwrap_or("-"));
        out.row("Phone", user.phone_number.as_deref().unwrap_or("-"));
        if let Some(dob) = user.date_of_birth {
            out.row("Birth date", dob);
        }
        out.row("Currency", &user.default_currency);
        out.row("Member since", user.created_at.format("%Y-%m-%d"));
    })
}

/// Uploads `image`, or removes the avatar when there is none.
pub async fn run_avatar(
    container: &AppContainer,
    out: &Output,
    image: Option<PathBuf>,
) -> Outcome<bool> {
    let screen = container.profile_screen();
    let state = match image {
        Some(path) => {
            let bytes = tokio::fs::read(&path).await.map_err(|e| {
                MoneyMateError::validation("file", format!("cannot read {}: {e}", path.display()))
            })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            screen.change_avatar(&file_name, bytes).await
        }
        None => screen.remove_avatar().await,
    };
    Ok(out.state("avatar", &state, |out, user| match &user.avatar_url {
        Some(url) => out.row("Avatar", url),
        None => out.line(out.ok("avatar removed")),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn password_comes_from_env_var() {
        // SAFETY: test-only env mutation, serialized with #[serial].
        unsafe { std::env::set_var(PASSWORD_ENV_VAR, "secret1") };
        let result = read_password("Password");
        unsafe { std::env::remove_var(PASSWORD_ENV_VAR) };

        assert_eq!(result.unwrap(), "secret1");
    }

    #[test]
    #[serial]
    fn missing_password_without_terminal_is_config_error() {
        unsafe { std::env::remove_var(PASSWORD_ENV_VAR) };
        if std::io::stdin().is_terminal() {
            return;
        }
        assert!(matches!(
            read_password("Password"),
            Err(MoneyMateError::Config(_))
        ));
    }
}
