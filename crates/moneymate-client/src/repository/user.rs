// SPDX-FileCopyrightText: 2026 MoneyMate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use moneymate_core::model::{AvatarUpload, User, UserUpdate};
use moneymate_core::{Outcome, UserRepository};

use crate::dto::{UserDto, UserUpdateRequest};
use crate::http::{ApiRequest, AuthenticatedClient, FilePart};

pub struct HttpUserRepository {
    client: Arc<AuthenticatedClient>,
}

impl HttpUserRepository {
    pub fn new(client: Arc<AuthenticatedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn get_current_user(&self) -> Outcome<User> {
        let dto: UserDto = self.client.fetch(ApiRequest::get("/api/users/me")).await?;
        Ok(dto.into())
    }

    async fn update_user(&self, update: UserUpdate) -> Outcome<User> {
        let request = ApiRequest::put("/api/users/me").json(&UserUpdateRequest::from(update))?;
        let dto: UserDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn upload_avatar(&self, avatar: AvatarUpload) -> Outcome<User> {
        let request = ApiRequest::post("/api/users/me/avatar").file(FilePart {
            field: "file".into(),
            file_name: avatar.file_name,
            content_type: avatar.content_type.into(),
            bytes: avatar.bytes,
        });
        let dto: UserDto = self.client.fetch(request).await?;
        Ok(dto.into())
    }

    async fn delete_avatar(&self) -> Outcome<User> {
        let dto: UserDto = self
            .client
            .fetch(ApiRequest::delete("/api/users/me/avatar"))
            .await?;
        Ok(dto.into())
    }
}
