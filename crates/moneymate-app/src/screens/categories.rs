// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use moneymate_core::model::{Category, Tag, TransactionType};
use moneymate_core::validation::CategoryForm;
use moneymate_core::{CategoryId, Outcome, TagId};
use tokio::sync::watch;

use crate::container::Repositories;
use crate::state::{Change, StateHolder, ViewState};
use crate::usecase::{
    CreateCategory, CreateTag, DeleteCategory, DeleteTag, GetCategories, GetExpenseCategories,
    GetIncomeCategories, GetTags,
};

/// Which categories the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryScope {
    #[default]
    All,
    Income,
    Expense,
}

impl From<TransactionType> for CategoryScope {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
            TransactionType::Transfer => Self::All,
        }
    }
}

/// Category and tag management.
pub struct CategoriesScreen {
    get_all: GetCategories,
    get_income: GetIncomeCategories,
    get_expense: GetExpenseCategories,
    create_category: CreateCategory,
    delete_category: DeleteCategory,
    get_tags: GetTags,
    create_tag: CreateTag,
    delete_tag: DeleteTag,
    scope: watch::Sender<CategoryScope>,
    categories: StateHolder<Vec<Category>>,
    tags: StateHolder<Vec<Tag>>,
    change: StateHolder<Change<Category>>,
    tag_change: StateHolder<Change<Tag>>,
}

impl CategoriesScreen {
    pub fn new(repos: &Repositories) -> Self {
        let (scope, _) = watch::channel(CategoryScope::All);
        Self {
            get_all: GetCategories::new(repos.categories.clone()),
            get_income: GetIncomeCategories::new(repos.categories.clone()),
            get_expense: GetExpenseCategories::new(repos.categories.clone()),
            create_category: CreateCategory::new(repos.categories.clone()),
            delete_category: DeleteCategory::new(repos.categories.clone()),
            get_tags: GetTags::new(repos.tags.clone()),
            create_tag: CreateTag::new(repos.tags.clone()),
            delete_tag: DeleteTag::new(repos.tags.clone()),
            scope,
            categories: StateHolder::loader("categories"),
            tags: StateHolder::loader("tags"),
            change: StateHolder::mutation("category_change"),
            tag_change: StateHolder::mutation("tag_change"),
        }
    }

    pub fn categories(&self) -> &StateHolder<Vec<Category>> {
        &self.categories
    }

    pub fn tags(&self) -> &StateHolder<Vec<Tag>> {
        &self.tags
    }

    pub fn change(&self) -> &StateHolder<Change<Category>> {
        &self.change
    }

    pub fn tag_change(&self) -> &StateHolder<Change<Tag>> {
        &self.tag_change
    }

    pub fn scope(&self) -> CategoryScope {
        *self.scope.borrow()
    }

    pub async fn load(&self, scope: CategoryScope) -> ViewState<Vec<Category>> {
        self.scope.send_replace(scope);
        self.categories.run(self.fetch(scope)).await
    }

    async fn fetch(&self, scope: CategoryScope) -> Outcome<Vec<Category>> {
        match scope {
            CategoryScope::All => self.get_all.execute().await,
            CategoryScope::Income => self.get_income.execute().await,
            CategoryScope::Expense => self.get_expense.execute().await,
        }
    }

    pub async fn load_tags(&self) -> ViewState<Vec<Tag>> {
        self.tags.run(self.get_tags.execute()).await
    }

    pub async fn create_category(&self, form: &CategoryForm) -> ViewState<Change<Category>> {
        let state = self
            .change
            .run(async { self.create_category.execute(form).await.map(Change::Saved) })
            .await;
        if matches!(state, ViewState::Success(_)) {
            self.categories.reload(self.fetch(self.scope())).await;
        }
        state
    }

    pub async fn delete_category(&self, id: CategoryId) -> ViewState<Change<Category>> {
        let state = self
            .change
            .run(async {
                self.delete_category
                    .execute(id)
                    .await
                    .map(|()| Change::Removed)
            })
            .await;
        if matches!(state, ViewState::Success(_)) {
            self.categories.reload(self.fetch(self.scope())).await;
        }
        state
    }

    pub async fn create_tag(&self, name: &str) -> ViewState<Change<Tag>> {
        let state = self
            .tag_change
            .run(async { self.create_tag.execute(name).await.map(Change::Saved) })
            .await;
        if matches!(state, ViewState::Success(_)) {
            self.tags.reload(self.get_tags.execute()).await;
        }
        state
    }

    pub async fn delete_tag(&self, id: TagId) -> ViewState<Change<Tag>> {
        let state = self
            .tag_change
            .run(async { self.delete_tag.execute(id).await.map(|()| Change::Removed) })
            .await;
        if matches!(state, ViewState::Success(_)) {
            self.tags.reload(self.get_tags.execute()).await;
        }
        state
    }
}
