// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response bodies in the backend's wire format.
//!
//! Amounts are strings and timestamps are naive, matching what the API
//! actually sends.

use serde_json::{Value, json};

pub fn token_json(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

pub fn user_json(id: i64, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "full_name": "Ana Test",
        "phone_number": null,
        "date_of_birth": null,
        "avatar_url": null,
        "default_currency": "USD",
        "is_active": true,
        "created_at": "2025-01-02T03:04:05.123456"
    })
}

pub fn wallet_json(id: i64, name: &str, balance: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "currency": "USD",
        "wallet_type": "debit_card",
        "balance": balance,
        "card_number": null,
        "color": "#3B82F6",
        "user_id": 7,
        "created_at": "2025-01-02T03:04:05"
    })
}

pub fn total_balance_json(total: &str) -> Value {
    json!({
        "total_balance": total,
        "currency": "USD",
        "breakdown": []
    })
}

pub fn transaction_json(id: i64, wallet: i64, kind: &str, amount: &str) -> Value {
    json!({
        "id": id,
        "name": format!("tx-{id}"),
        "amount": amount,
        "note": null,
        "type": kind,
        "transaction_date": "2025-02-01",
        "wallet_id": wallet,
        "category_id": 1,
        "user_id": 7,
        "created_at": "2025-02-01T09:00:00",
        "tags": [],
        "receipt_url": null
    })
}

pub fn category_json(id: i64, name: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "color": "#22C55E",
        "icon": null,
        "user_id": null
    })
}

pub fn tag_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "user_id": 7 })
}

pub fn budget_json(monthly_limit: &str, monthly_spent: &str) -> Value {
    json!({
        "id": 1,
        "month": 2,
        "year": 2025,
        "monthly_limit": monthly_limit,
        "daily_limit": "50.00",
        "monthly_spent": monthly_spent,
        "daily_spent": "0.00",
        "last_updated_date": "2025-02-01",
        "created_at": "2025-02-01T00:00:00"
    })
}

pub fn goal_json(id: i64, title: &str, goal_amount: &str, saved: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "image": null,
        "deadline": "2025-12-31",
        "goal_amount": goal_amount,
        "amount_saved": saved,
        "wallet_id": 1,
        "currency": "USD"
    })
}

pub fn savings_goal_json(target: &str, saved: &str) -> Value {
    json!({
        "id": 1,
        "month": 2,
        "year": 2025,
        "target_amount": target,
        "current_saved": saved
    })
}

pub fn category_limit_json(category: i64, limit: &str, spent: &str) -> Value {
    json!({
        "category_id": category,
        "category_name": "Food",
        "category_color": "#F97316",
        "category_icon": null,
        "monthly_limit": limit,
        "monthly_spent": spent
    })
}

pub fn financial_summary_json(income: &str, spent: &str, saved: &str) -> Value {
    json!({
        "id": 1,
        "month": 2,
        "year": 2025,
        "total_income": income,
        "total_spent": spent,
        "total_saved": saved,
        "created_at": "2025-02-01T00:00:00"
    })
}

/// Analytics figures are computed floats, not decimal strings.
pub fn comparison_json(category: i64, name: &str, current: f64, previous: f64) -> Value {
    let difference = current - previous;
    let change = if previous == 0.0 { 0.0 } else { difference / previous * 100.0 };
    json!({
        "category_id": category,
        "category_name": name,
        "current_month_amount": current,
        "previous_month_amount": previous,
        "difference": difference,
        "percentage_change": change
    })
}

pub fn top_category_json(category: i64, name: &str, total: f64) -> Value {
    json!({"category_id": category, "category_name": name, "total_amount": total})
}

pub fn spending_trends_json(spent: f64, income: f64) -> Value {
    json!({
        "monthly_summary": [{
            "year": 2025, "month": 2, "total_spent": spent, "total_income": income,
            "month_name": "2025-02", "display_name": "Feb 2025"
        }],
        "summary": {
            "total_spent": spent, "total_income": income, "net_flow": income - spent,
            "average_monthly_spent": spent, "months_analyzed": 1
        },
        "analysis_period": {
            "start_date": "2025-02-01", "end_date": "2025-02-28", "months_analyzed": 1
        }
    })
}

pub fn savings_trends_json(saved: f64, target: f64) -> Value {
    json!({
        "monthly_trends": [{
            "year": 2025, "month": 2, "display_name": "Feb 2025",
            "saved_amount": saved, "target_amount": target,
            "achievement_rate": if target == 0.0 { 0.0 } else { saved / target * 100.0 }
        }],
        "months_analyzed": 1,
        "analysis_period": {"start_date": "2025-02-01", "end_date": "2025-02-28"}
    })
}
