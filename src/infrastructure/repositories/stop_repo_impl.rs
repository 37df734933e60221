// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::status::StopStatus;
use crate::domain::models::stop::{NewStop, Stop};
use crate::domain::repositories::stop_repository::StopRepository;
use crate::infrastructure::database::entities::{
    route as route_entity, stop as stop_entity, street as street_entity,
};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;

/// 站点仓库实现
pub struct StopRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl StopRepositoryImpl {
    /// 创建新的站点仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<stop_entity::Model> for Stop {
    type Error = RepositoryError;

    fn try_from(model: stop_entity::Model) -> Result<Self, Self::Error> {
        let status = model
            .stop_status
            .parse::<StopStatus>()
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;

        Ok(Self {
            id: model.id,
            resident_id: model.resident_id,
            street_id: model.street_id,
            stop_time: model.stop_time,
            status,
        })
    }
}

fn to_stops(models: Vec<stop_entity::Model>) -> Result<Vec<Stop>, RepositoryError> {
    models.into_iter().map(Stop::try_from).collect()
}

#[async_trait]
impl StopRepository for StopRepositoryImpl {
    async fn create(&self, stop: &NewStop) -> Result<Stop, RepositoryError> {
        let model = stop_entity::ActiveModel {
            resident_id: Set(stop.resident_id),
            street_id: Set(stop.street_id),
            stop_time: Set(stop.stop_time),
            stop_status: Set(StopStatus::Requested.to_string()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Stop::try_from(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Stop>, RepositoryError> {
        stop_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Stop::try_from)
            .transpose()
    }

    async fn find_open_by_resident_and_street(
        &self,
        resident_id: i32,
        street_id: i32,
    ) -> Result<Option<Stop>, RepositoryError> {
        stop_entity::Entity::find()
            .filter(stop_entity::Column::ResidentId.eq(resident_id))
            .filter(stop_entity::Column::StreetId.eq(street_id))
            .filter(stop_entity::Column::StopStatus.ne(StopStatus::Cancelled.to_string()))
            .order_by_asc(stop_entity::Column::Id)
            .one(self.db.as_ref())
            .await?
            .map(Stop::try_from)
            .transpose()
    }

    async fn find_by_resident(&self, resident_id: i32) -> Result<Vec<Stop>, RepositoryError> {
        let models = stop_entity::Entity::find()
            .filter(stop_entity::Column::ResidentId.eq(resident_id))
            .order_by_asc(stop_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        to_stops(models)
    }

    async fn find_by_route(&self, route_id: i32) -> Result<Vec<Stop>, RepositoryError> {
        let models = stop_entity::Entity::find()
            .inner_join(street_entity::Entity)
            .filter(street_entity::Column::RouteId.eq(route_id))
            .order_by_asc(stop_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        to_stops(models)
    }

    async fn find_by_driver(&self, driver_id: i32) -> Result<Vec<Stop>, RepositoryError> {
        // stops -> streets -> routes
        let models = stop_entity::Entity::find()
            .inner_join(street_entity::Entity)
            .join(JoinType::InnerJoin, street_entity::Relation::Route.def())
            .filter(route_entity::Column::DriverId.eq(driver_id))
            .order_by_asc(stop_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        to_stops(models)
    }

    async fn update_status(
        &self,
        id: i32,
        from: StopStatus,
        to: StopStatus,
    ) -> Result<Option<Stop>, RepositoryError> {
        let result = stop_entity::Entity::update_many()
            .col_expr(stop_entity::Column::StopStatus, Expr::value(to.to_string()))
            .filter(stop_entity::Column::Id.eq(id))
            .filter(stop_entity::Column::StopStatus.eq(from.to_string()))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }
}
