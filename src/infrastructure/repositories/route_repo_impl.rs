// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::route::{NewRoute, Route};
use crate::domain::models::status::RouteStatus;
use crate::domain::models::street::{NewStreet, Street};
use crate::domain::repositories::route_repository::RouteRepository;
use crate::infrastructure::database::entities::{route as route_entity, street as street_entity};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;

/// 路线仓库实现
pub struct RouteRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RouteRepositoryImpl {
    /// 创建新的路线仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<route_entity::Model> for Route {
    type Error = RepositoryError;

    fn try_from(model: route_entity::Model) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<RouteStatus>()
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;

        Ok(Self {
            id: model.id,
            driver_id: model.driver_id,
            drive_date: model.drive_date,
            drive_time: model.drive_time,
            status,
        })
    }
}

fn to_routes(models: Vec<route_entity::Model>) -> Result<Vec<Route>, RepositoryError> {
    models.into_iter().map(Route::try_from).collect()
}

#[async_trait]
impl RouteRepository for RouteRepositoryImpl {
    async fn create_with_streets(
        &self,
        route: &NewRoute,
        streets: &[NewStreet],
    ) -> Result<(Route, Vec<Street>), RepositoryError> {
        // Dropping the transaction on an early return rolls everything back
        let txn = self.db.begin().await?;

        let route_model = route_entity::ActiveModel {
            driver_id: Set(route.driver_id),
            drive_date: Set(route.drive_date),
            drive_time: Set(route.drive_time),
            status: Set(RouteStatus::Scheduled.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut created = Vec::with_capacity(streets.len());
        for street in streets {
            let model = street_entity::ActiveModel {
                route_id: Set(route_model.id),
                street_name: Set(street.name.clone()),
                street_location: Set(street.location.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            created.push(Street::from(model));
        }

        txn.commit().await?;

        Ok((Route::try_from(route_model)?, created))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Route>, RepositoryError> {
        route_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Route::try_from)
            .transpose()
    }

    async fn find_by_driver(&self, driver_id: i32) -> Result<Vec<Route>, RepositoryError> {
        let models = route_entity::Entity::find()
            .filter(route_entity::Column::DriverId.eq(driver_id))
            .order_by_asc(route_entity::Column::DriveDate)
            .order_by_asc(route_entity::Column::DriveTime)
            .order_by_asc(route_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        to_routes(models)
    }

    async fn find_by_driver_and_status(
        &self,
        driver_id: i32,
        status: RouteStatus,
    ) -> Result<Vec<Route>, RepositoryError> {
        let models = route_entity::Entity::find()
            .filter(route_entity::Column::DriverId.eq(driver_id))
            .filter(route_entity::Column::Status.eq(status.to_string()))
            .order_by_asc(route_entity::Column::DriveDate)
            .order_by_asc(route_entity::Column::DriveTime)
            .order_by_asc(route_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        to_routes(models)
    }

    async fn find_by_status(&self, status: RouteStatus) -> Result<Vec<Route>, RepositoryError> {
        let models = route_entity::Entity::find()
            .filter(route_entity::Column::Status.eq(status.to_string()))
            .order_by_asc(route_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        to_routes(models)
    }

    async fn update(&self, route: &Route) -> Result<Route, RepositoryError> {
        let model = route_entity::Entity::find_by_id(route.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut active: route_entity::ActiveModel = model.into();
        active.drive_date = Set(route.drive_date);
        active.drive_time = Set(route.drive_time);
        active.status = Set(route.status.to_string());

        let updated = active.update(self.db.as_ref()).await?;
        Route::try_from(updated)
    }
}
