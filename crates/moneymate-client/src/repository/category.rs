// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Categories, tags and per-category limits.

use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::model::{Category, CategoryLimit, CategoryLimitSetting, NewCategory, Tag};
use moneymate_core::{
    CategoryId, CategoryLimitRepository, CategoryRepository, Outcome, TagId, TagRepository,
};
use rust_decimal::Decimal;

use crate::dto::{
    CategoryCreateRequest, CategoryDto, CategoryLimitDto, CategoryLimitRequest,
    CategoryLimitSettingDto, TagCreateRequest, TagDto,
};
use crate::http::{ApiRequest, AuthenticatedClient};

pub struct HttpCategoryRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpCategoryRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }

    async fn list(&self, path: &str) -> Outcome<Vec<Category>> {
        let dtos: Vec<CategoryDto> = self.client.fetch(ApiRequest::get(path)).await?;
        Ok(dtos.into_iter().map(Category::from).collect())
    }
}

#[async_trait]
impl CategoryRepository for HttpCategoryRepository {
    async fn get_categories(&self) -> Outcome<Vec<Category>> {
        self.list("/api/categories/").await
    }

    async fn get_income_categories(&self) -> Outcome<Vec<Category>> {
        self.list("/api/categories/income").await
    }

    async fn get_expense_categories(&self) -> Outcome<Vec<Category>> {
        self.list("/api/categories/expense").await
    }

    async fn create_category(&self, category: NewCategory) -> Outcome<Category> {
        let request =
            ApiRequest::post("/api/categories/").json(&CategoryCreateRequest::from(category))?;
        let dto: CategoryDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_category(&self, id: CategoryId) -> Outcome<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/categories/{id}")))
            .await
    }
}

pub struct HttpTagRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpTagRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TagRepository for HttpTagRepository {
    async fn get_tags(&self) -> Outcome<Vec<Tag>> {
        let dtos: Vec<TagDto> = self.client.fetch(ApiRequest::get("/api/tags/")).await?;
        Ok(dtos.into_iter().map(Tag::from).collect())
    }

    async fn create_tag(&self, name: &str) -> Outcome<Tag> {
        let request = ApiRequest::post("/api/tags/").json(&TagCreateRequest { name })?;
        let dto: TagDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_tag(&self, id: TagId) -> Outcome<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/tags/{id}")))
            .await
    }
}

pub struct HttpCategoryLimitRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpCategoryLimitRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryLimitRepository for HttpCategoryLimitRepository {
    async fn get_category_limits(&self) -> Outcome<Vec<CategoryLimit>> {
        let dtos: Vec<CategoryLimitDto> = self.client.fetch(ApiRequest::get("/api/limits/")).await?;
        Ok(dtos.into_iter().map(CategoryLimit::from).collect())
    }

    async fn set_category_limit(
        &self,
        category: CategoryId,
        monthly_limit: Decimal,
    ) -> Outcome<CategoryLimitSetting> {
        let request = ApiRequest::put(format!("/api/limits/{category}"))
            .json(&CategoryLimitRequest { monthly_limit })?;
        let dto: CategoryLimitSettingDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_category_limit(&self, category: CategoryId) -> Outcome<()> {
        self.client
            .execute(ApiRequest::delete(format!("/api/limits/{category}")))
            .await
    }
}
