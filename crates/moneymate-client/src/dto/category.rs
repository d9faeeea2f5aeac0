// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category, tag and per-category limit payloads.

use moneymate_core::model::{
    Category, CategoryLimit, CategoryLimitSetting, NewCategory, Tag, TransactionType,
};
use moneymate_core::{CategoryId, TagId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            kind: dto.kind,
            color: dto.color,
            icon: dto.icon,
            user_id: dto.user_id,
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            kind: category.kind,
            color: category.color,
            icon: category.icon,
            user_id: category.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryCreateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<NewCategory> for CategoryCreateRequest {
    fn from(category: NewCategory) -> Self {
        Self {
            name: category.name,
            kind: category.kind,
            color: category.color,
            icon: category.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDto {
    pub id: TagId,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl From<TagDto> for Tag {
    fn from(dto: TagDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            user_id: dto.user_id,
        }
    }
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            user_id: tag.user_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagCreateRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimitDto {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(default)]
    pub category_color: Option<String>,
    #[serde(default)]
    pub category_icon: Option<String>,
    #[serde(with = "codec::amount")]
    pub monthly_limit: Decimal,
    #[serde(with = "codec::amount")]
    pub monthly_spent: Decimal,
}

impl From<CategoryLimitDto> for CategoryLimit {
    fn from(dto: CategoryLimitDto) -> Self {
        Self {
            category_id: dto.category_id,
            category_name: dto.category_name,
            category_color: dto.category_color,
            category_icon: dto.category_icon,
            monthly_limit: dto.monthly_limit,
            monthly_spent: dto.monthly_spent,
        }
    }
}

impl From<CategoryLimit> for CategoryLimitDto {
    fn from(limit: CategoryLimit) -> Self {
        Self {
            category_id: limit.category_id,
            category_name: limit.category_name,
            category_color: limit.category_color,
            category_icon: limit.category_icon,
            monthly_limit: limit.monthly_limit,
            monthly_spent: limit.monthly_spent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimitSettingDto {
    pub id: i64,
    pub category_id: CategoryId,
    pub user_id: UserId,
    #[serde(with = "codec::amount")]
    pub monthly_limit: Decimal,
}

impl From<CategoryLimitSettingDto> for CategoryLimitSetting {
    fn from(dto: CategoryLimitSettingDto) -> Self {
        Self {
            id: dto.id,
            category_id: dto.category_id,
            user_id: dto.user_id,
            monthly_limit: dto.monthly_limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryLimitRequest {
    #[serde(with = "codec::amount")]
    pub monthly_limit: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_category_has_no_owner() {
        let dto: CategoryDto =
            serde_json::from_str(r#"{"id":1,"name":"Salary","type":"income","user_id":null}"#)
                .unwrap();
        let category = Category::from(dto);
        assert_eq!(category.kind, TransactionType::Income);
        assert!(category.user_id.is_none());
        assert!(category.color.is_none());
    }

    #[test]
    fn limit_overview_parses_numeric_amounts() {
        let dto: CategoryLimitDto = serde_json::from_str(
            r#"{"category_id":4,"category_name":"Food","category_color":null,
                "category_icon":null,"monthly_limit":"300.00","monthly_spent":120.5}"#,
        )
        .unwrap();
        assert_eq!(dto.monthly_spent, Decimal::new(1205, 1));
    }
}
