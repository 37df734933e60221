// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::street::{NewStreet, Street};
use crate::domain::repositories::street_repository::StreetRepository;
use crate::infrastructure::database::entities::street as street_entity;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

/// 街道仓库实现
pub struct StreetRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl StreetRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<street_entity::Model> for Street {
    fn from(model: street_entity::Model) -> Self {
        Self {
            id: model.id,
            route_id: model.route_id,
            name: model.street_name,
            location: model.street_location,
        }
    }
}

#[async_trait]
impl StreetRepository for StreetRepositoryImpl {
    async fn create(&self, route_id: i32, street: &NewStreet) -> Result<Street, RepositoryError> {
        let model = street_entity::ActiveModel {
            route_id: Set(route_id),
            street_name: Set(street.name.clone()),
            street_location: Set(street.location.clone()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Street>, RepositoryError> {
        let model = street_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_route(&self, route_id: i32) -> Result<Vec<Street>, RepositoryError> {
        let models = street_entity::Entity::find()
            .filter(street_entity::Column::RouteId.eq(route_id))
            .order_by_asc(street_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Street>, RepositoryError> {
        let models = street_entity::Entity::find()
            .order_by_asc(street_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
