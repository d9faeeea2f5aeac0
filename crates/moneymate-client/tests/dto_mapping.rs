// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping a DTO to its domain entity and back loses nothing.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use moneymate_client::dto::{
    BudgetDto, CategoryDto, CategoryLimitDto, GoalDto, SavingsGoalDto, TagDto, TransactionDto,
    UserDto, WalletDto,
};
use moneymate_core::model::{
    Budget, Category, CategoryLimit, Goal, SavingsGoal, Tag, Transaction, TransactionType, User,
    Wallet, WalletType,
};
use moneymate_core::{
    BudgetId, CategoryId, GoalId, SavingsGoalId, TagId, TransactionId, UserId, WalletId,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=8).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000, 0u32..1_000_000).prop_map(|(secs, micros)| {
        Utc.timestamp_opt(secs, micros * 1_000)
            .single()
            .unwrap_or_default()
    })
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

fn wallet_type() -> impl Strategy<Value = WalletType> {
    prop_oneof![
        Just(WalletType::DebitCard),
        Just(WalletType::Cash),
        Just(WalletType::CreditCard),
        Just(WalletType::SavingAccount),
        Just(WalletType::Investment),
        Just(WalletType::Loan),
        Just(WalletType::Mortgage),
        Just(WalletType::Goal),
    ]
}

fn transaction_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Income),
        Just(TransactionType::Expense),
        Just(TransactionType::Transfer),
    ]
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,24}"
}

prop_compose! {
    fn wallet_dto()(
        id in any::<i64>(), name in text(), currency in "[A-Z]{3}", wallet_type in wallet_type(),
        balance in decimal(), card_number in proptest::option::of("[0-9]{16}"),
        color in "#[0-9A-F]{6}", user_id in any::<i64>(), created_at in timestamp(),
    ) -> WalletDto {
        WalletDto {
            id: WalletId(id), name, currency, wallet_type, balance, card_number, color,
            user_id: UserId(user_id), created_at,
        }
    }
}

prop_compose! {
    fn transaction_dto()(
        id in any::<i64>(), name in text(), amount in decimal(),
        note in proptest::option::of(text()), kind in transaction_type(),
        transaction_date in date(), wallet_id in any::<i64>(), category_id in any::<i64>(),
        user_id in any::<i64>(), created_at in timestamp(),
        tags in proptest::collection::vec(text(), 0..4),
        receipt_url in proptest::option::of(text()),
    ) -> TransactionDto {
        TransactionDto {
            id: TransactionId(id), name, amount, note, kind, transaction_date,
            wallet_id: WalletId(wallet_id), category_id: CategoryId(category_id),
            user_id: UserId(user_id), created_at, tags, receipt_url,
        }
    }
}

prop_compose! {
    fn user_dto()(
        id in any::<i64>(), email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
        full_name in proptest::option::of(text()), phone_number in proptest::option::of("[0-9]{10}"),
        date_of_birth in proptest::option::of(date()), avatar_url in proptest::option::of(text()),
        default_currency in "[A-Z]{3}", is_active in any::<bool>(), created_at in timestamp(),
    ) -> UserDto {
        UserDto {
            id: UserId(id), email, full_name, phone_number, date_of_birth, avatar_url,
            default_currency, is_active, created_at,
        }
    }
}

prop_compose! {
    fn budget_dto()(
        id in any::<i64>(), month in 1u32..=12, year in 2000i32..2100,
        monthly_limit in decimal(), daily_limit in decimal(),
        monthly_spent in decimal(), daily_spent in decimal(),
        last_updated_date in date(), created_at in timestamp(),
    ) -> BudgetDto {
        BudgetDto {
            id: BudgetId(id), month, year, monthly_limit, daily_limit, monthly_spent,
            daily_spent, last_updated_date, created_at,
        }
    }
}

prop_compose! {
    fn goal_dto()(
        id in any::<i64>(), title in text(), description in proptest::option::of(text()),
        image in proptest::option::of(text()), deadline in proptest::option::of(date()),
        goal_amount in decimal(), amount_saved in decimal(), wallet_id in any::<i64>(),
        currency in "[A-Z]{3}",
    ) -> GoalDto {
        GoalDto {
            id: GoalId(id), title, description, image, deadline, goal_amount, amount_saved,
            wallet_id: WalletId(wallet_id), currency,
        }
    }
}

proptest! {
    #[test]
    fn wallet_round_trips(dto in wallet_dto()) {
        prop_assert_eq!(WalletDto::from(Wallet::from(dto.clone())), dto);
    }

    #[test]
    fn transaction_round_trips(dto in transaction_dto()) {
        prop_assert_eq!(TransactionDto::from(Transaction::from(dto.clone())), dto);
    }

    #[test]
    fn user_round_trips(dto in user_dto()) {
        prop_assert_eq!(UserDto::from(User::from(dto.clone())), dto);
    }

    #[test]
    fn budget_round_trips(dto in budget_dto()) {
        prop_assert_eq!(BudgetDto::from(Budget::from(dto.clone())), dto);
    }

    #[test]
    fn goal_round_trips(dto in goal_dto()) {
        prop_assert_eq!(GoalDto::from(Goal::from(dto.clone())), dto);
    }

    #[test]
    fn category_round_trips(
        id in any::<i64>(), name in text(), kind in transaction_type(),
        color in proptest::option::of("#[0-9A-F]{6}"), icon in proptest::option::of(text()),
        user_id in proptest::option::of(any::<i64>()),
    ) {
        let dto = CategoryDto { id: CategoryId(id), name, kind, color, icon, user_id: user_id.map(UserId) };
        prop_assert_eq!(CategoryDto::from(Category::from(dto.clone())), dto);
    }

    #[test]
    fn tag_round_trips(id in any::<i64>(), name in text(), user_id in proptest::option::of(any::<i64>())) {
        let dto = TagDto { id: TagId(id), name, user_id: user_id.map(UserId) };
        prop_assert_eq!(TagDto::from(Tag::from(dto.clone())), dto);
    }

    #[test]
    fn savings_goal_round_trips(
        id in any::<i64>(), month in 1u32..=12, year in 2000i32..2100,
        target_amount in decimal(), current_saved in decimal(),
    ) {
        let dto = SavingsGoalDto { id: SavingsGoalId(id), month, year, target_amount, current_saved };
        prop_assert_eq!(SavingsGoalDto::from(SavingsGoal::from(dto.clone())), dto);
    }

    #[test]
    fn category_limit_round_trips(
        category_id in any::<i64>(), category_name in text(),
        category_color in proptest::option::of(text()), category_icon in proptest::option::of(text()),
        monthly_limit in decimal(), monthly_spent in decimal(),
    ) {
        let dto = CategoryLimitDto {
            category_id: CategoryId(category_id), category_name, category_color, category_icon,
            monthly_limit, monthly_spent,
        };
        prop_assert_eq!(CategoryLimitDto::from(CategoryLimit::from(dto.clone())), dto);
    }

    /// The wire encoding of amounts survives a JSON trip too.
    #[test]
    fn wallet_json_round_trips(dto in wallet_dto()) {
        let json = serde_json::to_string(&dto).unwrap();
        let back: WalletDto = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, dto);
    }
}
