// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Categories, tags and per-category limits.

use std::sync::Arc;

use moneymate_core::model::{Category, CategoryLimit, CategoryLimitSetting, Tag};
use moneymate_core::validation::{self, CategoryForm};
use moneymate_core::{
    CategoryId, CategoryLimitRepository, CategoryRepository, Outcome, TagId, TagRepository,
};

use super::rejected;

delegating_use_case!(GetCategories => CategoryRepository::get_categories() -> Vec<Category>);
delegating_use_case!(GetIncomeCategories => CategoryRepository::get_income_categories() -> Vec<Category>);
delegating_use_case!(GetExpenseCategories => CategoryRepository::get_expense_categories() -> Vec<Category>);
delegating_use_case!(DeleteCategory => CategoryRepository::delete_category(id: CategoryId) -> ());

pub struct CreateCategory {
    repo: Arc<dyn CategoryRepository>,
}

impl CreateCategory {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, form: &CategoryForm) -> Outcome<Category> {
        let category = form.validate().map_err(|e| rejected("create_category", e))?;
        self.repo.create_category(category).await
    }
}

delegating_use_case!(GetTags => TagRepository::get_tags() -> Vec<Tag>);
delegating_use_case!(DeleteTag => TagRepository::delete_tag(id: TagId) -> ());

pub struct CreateTag {
    repo: Arc<dyn TagRepository>,
}

impl CreateTag {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: &str) -> Outcome<Tag> {
        let name = validation::required("name", name).map_err(|e| rejected("create_tag", e))?;
        self.repo.create_tag(&name).await
    }
}

delegating_use_case!(
    GetCategoryLimits => CategoryLimitRepository::get_category_limits() -> Vec<CategoryLimit>
);
delegating_use_case!(
    DeleteCategoryLimit => CategoryLimitRepository::delete_category_limit(category: CategoryId) -> ()
);

pub struct SetCategoryLimit {
    repo: Arc<dyn CategoryLimitRepository>,
}

impl SetCategoryLimit {
    pub fn new(repo: Arc<dyn CategoryLimitRepository>) -> Self {
        Self { repo }
    }

    /// `monthly_limit` is the amount as typed; it must be non-negative.
    pub async fn execute(
        &self,
        category: CategoryId,
        monthly_limit: &str,
    ) -> Outcome<CategoryLimitSetting> {
        let limit = validation::non_negative_amount("monthly_limit", monthly_limit)
            .map_err(|e| rejected("set_category_limit", e))?;
        self.repo.set_category_limit(category, limit).await
    }
}
