// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side input checks.
//!
//! Each form holds user input as typed. `validate` either produces the
//! repository input or a [`MoneyMateError::Validation`] naming the first
//! offending field. Nothing here touches the network.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{MoneyMateError, Outcome};
use crate::model::{
    AvatarUpload, BudgetUpdate, DateRange, GoalUpdate, NewCategory, NewGoal, NewTransaction, NewTransfer, NewWallet,
    SignUp, TransactionType, UserUpdate, WalletType, WalletUpdate,
};
use crate::types::{CategoryId, TagId, WalletId};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("email pattern")
});

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("color pattern"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern"));

static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency pattern"));

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 128;

/// Longest span a period report may cover.
pub const MAX_REPORT_DAYS: i64 = 365;
/// Trend reports look back between one and this many months.
pub const MAX_TREND_MONTHS: u32 = 12;
pub const AVATAR_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Trimmed, non-empty text.
pub fn required(field: &str, raw: &str) -> Outcome<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(MoneyMateError::validation(field, format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Empty input maps to `None`.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Parses a decimal amount. A comma decimal separator is accepted.
pub fn amount(field: &str, raw: &str) -> Outcome<Decimal> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return Err(MoneyMateError::validation(field, format!("{field} is required")));
    }
    Decimal::from_str(&cleaned)
        .map_err(|_| MoneyMateError::validation(field, format!("{field} must be a number")))
}

pub fn non_negative_amount(field: &str, raw: &str) -> Outcome<Decimal> {
    let value = amount(field, raw)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(MoneyMateError::validation(
            field,
            format!("{field} must not be negative"),
        ));
    }
    Ok(value)
}

pub fn positive_amount(field: &str, raw: &str) -> Outcome<Decimal> {
    let value = amount(field, raw)?;
    if value <= Decimal::ZERO {
        return Err(MoneyMateError::validation(
            field,
            format!("{field} must be greater than zero"),
        ));
    }
    Ok(value)
}

pub fn email(raw: &str) -> Outcome<String> {
    let value = required("email", raw)?;
    if !EMAIL.is_match(&value) {
        return Err(MoneyMateError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(value)
}

pub fn password(raw: &str) -> Outcome<String> {
    let len = raw.chars().count();
    if len == 0 {
        return Err(MoneyMateError::validation("password", "password is required"));
    }
    if len < PASSWORD_MIN_LEN {
        return Err(MoneyMateError::validation(
            "password",
            format!("Password should be at least {PASSWORD_MIN_LEN} characters"),
        ));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(MoneyMateError::validation(
            "password",
            format!("Password should be at most {PASSWORD_MAX_LEN} characters"),
        ));
    }
    Ok(raw.to_string())
}

pub fn color(raw: &str) -> Outcome<String> {
    let value = raw.trim();
    if !HEX_COLOR.is_match(value) {
        return Err(MoneyMateError::validation(
            "color",
            "color must look like #RRGGBB",
        ));
    }
    Ok(value.to_string())
}

pub fn currency(raw: &str) -> Outcome<String> {
    let value = raw.trim().to_ascii_uppercase();
    if !CURRENCY.is_match(&value) {
        return Err(MoneyMateError::validation(
            "currency",
            "currency must be a three-letter code",
        ));
    }
    Ok(value)
}

pub fn date(field: &str, raw: &str) -> Outcome<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| MoneyMateError::validation(field, format!("{field} must be YYYY-MM-DD")))
}

fn optional_date(field: &str, raw: Option<&str>) -> Outcome<Option<NaiveDate>> {
    optional_text(raw).map(|v| date(field, &v)).transpose()
}

/// Start and end of a period report, both inclusive.
pub fn date_range(start: &str, end: &str) -> Outcome<DateRange> {
    let range = DateRange {
        start: date("start_date", start)?,
        end: date("end_date", end)?,
    };
    if range.start > range.end {
        return Err(MoneyMateError::validation(
            "start_date",
            "Start date cannot be after end date",
        ));
    }
    if (range.end - range.start).num_days() > MAX_REPORT_DAYS {
        return Err(MoneyMateError::validation(
            "end_date",
            "Date range cannot exceed 1 year",
        ));
    }
    Ok(range)
}

/// A `YYYY-MM` month, returned as its first day.
pub fn report_month(raw: &str) -> Outcome<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|_| MoneyMateError::validation("month", "month must be YYYY-MM"))
}

pub fn trend_months(months: u32) -> Outcome<u32> {
    if !(1..=MAX_TREND_MONTHS).contains(&months) {
        return Err(MoneyMateError::validation(
            "months",
            format!("months must be between 1 and {MAX_TREND_MONTHS}"),
        ));
    }
    Ok(months)
}

/// Checks an avatar image by extension and size before it is uploaded.
pub fn avatar(file_name: &str, bytes: Vec<u8>) -> Outcome<AvatarUpload> {
    let file_name = required("file", file_name)?;
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let content_type = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => {
            return Err(MoneyMateError::validation(
                "file",
                "Only JPG, JPEG, PNG, and GIF files are allowed",
            ));
        }
    };
    if bytes.is_empty() {
        return Err(MoneyMateError::validation("file", "file is empty"));
    }
    if bytes.len() > AVATAR_MAX_BYTES {
        return Err(MoneyMateError::validation(
            "file",
            "File size must be less than 5MB",
        ));
    }
    Ok(AvatarUpload {
        file_name,
        content_type,
        bytes,
    })
}

fn phone(raw: &str) -> Outcome<String> {
    let value = raw.trim();
    if !PHONE.is_match(value) {
        return Err(MoneyMateError::validation(
            "phone_number",
            "Please enter a valid phone number",
        ));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Returns the trimmed email and the password as typed.
    pub fn validate(&self) -> Outcome<(String, String)> {
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(MoneyMateError::validation("password", "password is required"));
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub default_currency: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
}

impl SignUpForm {
    pub fn validate(&self) -> Outcome<SignUp> {
        let full_name = required("full_name", &self.full_name)?;
        let email = email(&self.email)?;
        let password = password(&self.password)?;
        let default_currency = if self.default_currency.trim().is_empty() {
            "USD".to_string()
        } else {
            currency(&self.default_currency)?
        };
        Ok(SignUp {
            email,
            password,
            full_name: Some(full_name),
            phone_number: optional_text(self.phone_number.as_deref())
                .map(|v| phone(&v))
                .transpose()?,
            date_of_birth: optional_date("date_of_birth", self.date_of_birth.as_deref())?,
            default_currency,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub default_currency: Option<String>,
    pub password: Option<String>,
}

impl ProfileForm {
    pub fn validate(&self) -> Outcome<UserUpdate> {
        Ok(UserUpdate {
            email: optional_text(self.email.as_deref())
                .map(|v| email(&v))
                .transpose()?,
            full_name: optional_text(self.full_name.as_deref()),
            phone_number: optional_text(self.phone_number.as_deref())
                .map(|v| phone(&v))
                .transpose()?,
            date_of_birth: optional_date("date_of_birth", self.date_of_birth.as_deref())?,
            default_currency: optional_text(self.default_currency.as_deref())
                .map(|v| currency(&v))
                .transpose()?,
            password: self
                .password
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(password)
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WalletForm {
    pub name: String,
    pub currency: String,
    pub wallet_type: WalletType,
    pub balance: String,
    pub card_number: Option<String>,
    pub color: String,
}

impl WalletForm {
    /// Balance must parse as a non-negative decimal.
    pub fn validate(&self) -> Outcome<NewWallet> {
        Ok(NewWallet {
            name: required("name", &self.name)?,
            currency: currency(&self.currency)?,
            wallet_type: self.wallet_type,
            balance: non_negative_amount("balance", &self.balance)?,
            card_number: optional_text(self.card_number.as_deref()),
            color: color(&self.color)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct WalletUpdateForm {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub wallet_type: Option<WalletType>,
    pub balance: Option<String>,
    pub card_number: Option<String>,
    pub color: Option<String>,
}

impl WalletUpdateForm {
    pub fn validate(&self) -> Outcome<WalletUpdate> {
        Ok(WalletUpdate {
            name: self.name.as_deref().map(|v| required("name", v)).transpose()?,
            currency: self.currency.as_deref().map(currency).transpose()?,
            wallet_type: self.wallet_type,
            balance: self
                .balance
                .as_deref()
                .map(|v| non_negative_amount("balance", v))
                .transpose()?,
            card_number: optional_text(self.card_number.as_deref()),
            color: self.color.as_deref().map(color).transpose()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub name: String,
    pub amount: String,
    pub note: Option<String>,
    pub kind: TransactionType,
    pub transaction_date: String,
    pub wallet_id: WalletId,
    pub category_id: CategoryId,
    pub tag_ids: Vec<TagId>,
}

impl TransactionForm {
    pub fn validate(&self) -> Outcome<NewTransaction> {
        if self.kind == TransactionType::Transfer {
            return Err(MoneyMateError::validation(
                "type",
                "use a transfer to move money between wallets",
            ));
        }
        Ok(NewTransaction {
            name: required("name", &self.name)?,
            amount: positive_amount("amount", &self.amount)?,
            note: optional_text(self.note.as_deref()),
            kind: self.kind,
            transaction_date: date("transaction_date", &self.transaction_date)?,
            wallet_id: self.wallet_id,
            category_id: self.category_id,
            tag_ids: self.tag_ids.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct TransferForm {
    pub source_wallet_id: WalletId,
    pub destination_wallet_id: WalletId,
    pub amount: String,
    pub note: Option<String>,
}

impl TransferForm {
    pub fn validate(&self) -> Outcome<NewTransfer> {
        if self.source_wallet_id == self.destination_wallet_id {
            return Err(MoneyMateError::validation(
                "destination_wallet_id",
                "source and destination wallets must differ",
            ));
        }
        Ok(NewTransfer {
            source_wallet_id: self.source_wallet_id,
            destination_wallet_id: self.destination_wallet_id,
            amount: positive_amount("amount", &self.amount)?,
            note: optional_text(self.note.as_deref()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub name: String,
    pub kind: TransactionType,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl CategoryForm {
    pub fn validate(&self) -> Outcome<NewCategory> {
        if self.kind == TransactionType::Transfer {
            return Err(MoneyMateError::validation(
                "type",
                "categories are either income or expense",
            ));
        }
        Ok(NewCategory {
            name: required("name", &self.name)?,
            kind: self.kind,
            color: optional_text(self.color.as_deref())
                .map(|v| color(&v))
                .transpose()?,
            icon: optional_text(self.icon.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    pub monthly_limit: Option<String>,
    pub daily_limit: Option<String>,
}

impl BudgetForm {
    pub fn validate(&self) -> Outcome<BudgetUpdate> {
        let update = BudgetUpdate {
            monthly_limit: optional_text(self.monthly_limit.as_deref())
                .map(|v| non_negative_amount("monthly_limit", &v))
                .transpose()?,
            daily_limit: optional_text(self.daily_limit.as_deref())
                .map(|v| non_negative_amount("daily_limit", &v))
                .transpose()?,
        };
        if update.monthly_limit.is_none() && update.daily_limit.is_none() {
            return Err(MoneyMateError::validation(
                "monthly_limit",
                "set a monthly or daily limit",
            ));
        }
        Ok(update)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub goal_amount: String,
    pub currency: String,
}

impl GoalForm {
    pub fn validate(&self) -> Outcome<NewGoal> {
        Ok(NewGoal {
            title: required("title", &self.title)?,
            description: optional_text(self.description.as_deref()),
            deadline: optional_date("deadline", self.deadline.as_deref())?,
            goal_amount: positive_amount("goal_amount", &self.goal_amount)?,
            currency: if self.currency.trim().is_empty() {
                "USD".to_string()
            } else {
                currency(&self.currency)?
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalUpdateForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub deadline: Option<String>,
    pub goal_amount: Option<String>,
}

impl GoalUpdateForm {
    pub fn validate(&self) -> Outcome<GoalUpdate> {
        Ok(GoalUpdate {
            title: self.title.as_deref().map(|v| required("title", v)).transpose()?,
            description: optional_text(self.description.as_deref()),
            image: optional_text(self.image.as_deref()),
            deadline: optional_date("deadline", self.deadline.as_deref())?,
            goal_amount: self
                .goal_amount
                .as_deref()
                .map(|v| positive_amount("goal_amount", v))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn wallet_form(balance: &str) -> WalletForm {
        WalletForm {
            name: "Main".into(),
            currency: "usd".into(),
            wallet_type: WalletType::Cash,
            balance: balance.into(),
            card_number: None,
            color: "#3B82F6".into(),
        }
    }

    fn field_of(err: MoneyMateError) -> String {
        match err {
            MoneyMateError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn negative_wallet_balance_is_rejected() {
        let err = wallet_form("-5").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(field_of(err), "balance");
    }

    #[test]
    fn wallet_balance_accepts_zero_and_comma_decimal() {
        assert_eq!(wallet_form("0").validate().unwrap().balance, Decimal::ZERO);
        let wallet = wallet_form("12,50").validate().unwrap();
        assert_eq!(wallet.balance, Decimal::new(1250, 2));
        assert_eq!(wallet.currency, "USD");
    }

    #[test]
    fn non_numeric_balance_is_rejected() {
        assert_eq!(field_of(wallet_form("lots").validate().unwrap_err()), "balance");
    }

    #[test]
    fn bad_color_is_rejected() {
        let mut form = wallet_form("10");
        form.color = "blue".into();
        assert_eq!(field_of(form.validate().unwrap_err()), "color");
    }

    #[test]
    fn sign_in_requires_plausible_email() {
        let form = SignInForm {
            email: "not-an-email".into(),
            password: "secret123".into(),
        };
        assert_eq!(field_of(form.validate().unwrap_err()), "email");

        let ok = SignInForm {
            email: " a@b.com ".into(),
            password: "secret123".into(),
        };
        assert_eq!(ok.validate().unwrap().0, "a@b.com");
    }

    #[test]
    fn sign_up_enforces_password_length() {
        let form = SignUpForm {
            full_name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "12345".into(),
            default_currency: String::new(),
            phone_number: None,
            date_of_birth: None,
        };
        assert_eq!(field_of(form.validate().unwrap_err()), "password");

        let ok = SignUpForm {
            password: "123456".into(),
            ..form
        };
        let signup = ok.validate().unwrap();
        assert_eq!(signup.default_currency, "USD");
    }

    #[test]
    fn sign_up_checks_optional_phone_and_birth_date() {
        let base = SignUpForm {
            full_name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "123456".into(),
            ..SignUpForm::default()
        };
        let bad_phone = SignUpForm {
            phone_number: Some("12-34".into()),
            ..base.clone()
        };
        assert_eq!(field_of(bad_phone.validate().unwrap_err()), "phone_number");

        let bad_date = SignUpForm {
            date_of_birth: Some("01/02/1990".into()),
            ..base.clone()
        };
        assert_eq!(field_of(bad_date.validate().unwrap_err()), "date_of_birth");

        let ok = SignUpForm {
            phone_number: Some("+380501234567".into()),
            date_of_birth: Some("1990-02-01".into()),
            ..base
        };
        let signup = ok.validate().unwrap();
        assert_eq!(signup.phone_number.as_deref(), Some("+380501234567"));
        assert!(signup.date_of_birth.is_some());
    }

    #[test]
    fn transaction_amount_must_be_positive() {
        let form = TransactionForm {
            name: "Coffee".into(),
            amount: "0".into(),
            note: None,
            kind: TransactionType::Expense,
            transaction_date: "2026-03-01".into(),
            wallet_id: WalletId(1),
            category_id: CategoryId(2),
            tag_ids: vec![],
        };
        assert_eq!(field_of(form.validate().unwrap_err()), "amount");

        let bad_date = TransactionForm {
            amount: "3.50".into(),
            transaction_date: "01/03/2026".into(),
            ..form
        };
        assert_eq!(field_of(bad_date.validate().unwrap_err()), "transaction_date");
    }

    #[test]
    fn transfer_between_same_wallet_is_rejected() {
        let form = TransferForm {
            source_wallet_id: WalletId(3),
            destination_wallet_id: WalletId(3),
            amount: "10".into(),
            note: None,
        };
        assert_eq!(field_of(form.validate().unwrap_err()), "destination_wallet_id");
    }

    #[test]
    fn budget_requires_some_limit() {
        assert!(BudgetForm::default().validate().is_err());
        let update = BudgetForm {
            monthly_limit: Some("1500".into()),
            daily_limit: Some(" ".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(update.monthly_limit, Some(Decimal::new(1500, 0)));
        assert_eq!(update.daily_limit, None);
    }

    #[test]
    fn profile_checks_only_supplied_fields() {
        let update = ProfileForm {
            full_name: Some("Ana Lima".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(update.full_name.as_deref(), Some("Ana Lima"));
        assert!(update.email.is_none());

        let bad_phone = ProfileForm {
            phone_number: Some("12".into()),
            ..Default::default()
        };
        assert_eq!(field_of(bad_phone.validate().unwrap_err()), "phone_number");
    }

    #[test]
    fn goal_amount_must_be_positive() {
        let form = GoalForm {
            title: "Bike".into(),
            goal_amount: "-1".into(),
            ..Default::default()
        };
        assert_eq!(field_of(form.validate().unwrap_err()), "goal_amount");
    }

    #[test]
    fn report_ranges_are_ordered_and_bounded() {
        let range = date_range("2025-01-01", "2025-12-31").unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(
            field_of(date_range("2025-02-01", "2025-01-01").unwrap_err()),
            "start_date"
        );
        assert_eq!(
            field_of(date_range("2024-01-01", "2025-01-02").unwrap_err()),
            "end_date"
        );
        assert_eq!(field_of(date_range("yesterday", "2025-01-01").unwrap_err()), "start_date");
    }

    #[test]
    fn report_month_takes_year_and_month() {
        assert_eq!(
            report_month(" 2025-03 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(report_month("2025-13").is_err());
        assert!(report_month("March").is_err());
    }

    #[test]
    fn trend_months_stay_within_a_year() {
        assert_eq!(trend_months(1).unwrap(), 1);
        assert_eq!(trend_months(12).unwrap(), 12);
        assert_eq!(field_of(trend_months(0).unwrap_err()), "months");
        assert!(trend_months(13).is_err());
    }

    #[test]
    fn avatar_checks_extension_and_size() {
        let upload = avatar("Me.JPG", vec![1, 2, 3]).unwrap();
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.file_name, "Me.JPG");

        let err = avatar("notes.pdf", vec![1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            MoneyMateError::validation("file", "Only JPG, JPEG, PNG, and GIF files are allowed")
                .to_string()
        );
        assert!(avatar("me.png", Vec::new()).is_err());
        assert!(avatar("me.png", vec![0; AVATAR_MAX_BYTES]).is_ok());
        assert!(avatar("me.png", vec![0; AVATAR_MAX_BYTES + 1]).is_err());
        assert!(avatar("png", vec![1]).is_err());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_non_negative_balance_passes(units in 0i64..1_000_000_000, cents in 0u32..100) {
                let raw = format!("{units}.{cents:02}");
                let wallet = wallet_form(&raw).validate().unwrap();
                prop_assert_eq!(wallet.balance, Decimal::from_str(&raw).unwrap());
            }

            #[test]
            fn any_negative_balance_fails(units in 1i64..1_000_000_000) {
                let raw = format!("-{units}");
                let err = wallet_form(&raw).validate().unwrap_err();
                prop_assert_eq!(err.kind(), ErrorKind::Validation);
            }
        }
    }
}
