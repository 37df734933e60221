// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::user::{Driver, NewDriver, NewResident, Resident, User, UserRole};
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::{
    driver as driver_entity, resident as resident_entity, user as user_entity,
};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;

/// 账户仓库实现
pub struct UserRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的账户仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 根据判别字段加载账户的子类型资料
    async fn load_user<C: ConnectionTrait>(
        conn: &C,
        user: &user_entity::Model,
    ) -> Result<User, RepositoryError> {
        let role: UserRole = user
            .user_type
            .parse()
            .map_err(|_| RepositoryError::Corrupt(format!("user_type '{}'", user.user_type)))?;

        match role {
            UserRole::Driver => {
                let driver = driver_entity::Entity::find_by_id(user.id)
                    .one(conn)
                    .await?
                    .ok_or_else(|| missing_payload(user.id))?;
                Ok(User::Driver(to_driver(user.clone(), driver)))
            }
            UserRole::Resident => {
                let resident = resident_entity::Entity::find_by_id(user.id)
                    .one(conn)
                    .await?
                    .ok_or_else(|| missing_payload(user.id))?;
                Ok(User::Resident(to_resident(user.clone(), resident)))
            }
        }
    }
}

fn missing_payload(id: i32) -> RepositoryError {
    RepositoryError::Corrupt(format!("account {} has no subtype row", id))
}

fn to_driver(user: user_entity::Model, driver: driver_entity::Model) -> Driver {
    Driver {
        id: user.id,
        user_name: user.user_name,
        route_label: driver.route_label,
        current_lng: driver.current_lng,
        current_lat: driver.current_lat,
    }
}

fn to_resident(user: user_entity::Model, resident: resident_entity::Model) -> Resident {
    Resident {
        id: user.id,
        user_name: user.user_name,
        name: resident.resident_name,
        address: resident.resident_address,
        phone: resident.resident_phone,
    }
}

fn join_driver(
    row: (driver_entity::Model, Option<user_entity::Model>),
) -> Result<Driver, RepositoryError> {
    let (driver, user) = row;
    let user = user.ok_or_else(|| missing_payload(driver.user_id))?;
    Ok(to_driver(user, driver))
}

fn join_resident(
    row: (resident_entity::Model, Option<user_entity::Model>),
) -> Result<Resident, RepositoryError> {
    let (resident, user) = row;
    let user = user.ok_or_else(|| missing_payload(resident.user_id))?;
    Ok(to_resident(user, resident))
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create_driver(&self, driver: &NewDriver) -> Result<Driver, RepositoryError> {
        let txn = self.db.begin().await?;

        let user = user_entity::ActiveModel {
            user_name: Set(driver.user_name.clone()),
            password: Set(driver.password_digest.clone()),
            user_type: Set(UserRole::Driver.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let payload = driver_entity::ActiveModel {
            user_id: Set(user.id),
            route_label: Set(driver.route_label.clone()),
            current_lat: Set(driver.current_lat),
            current_lng: Set(driver.current_lng),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(to_driver(user, payload))
    }

    async fn create_resident(&self, resident: &NewResident) -> Result<Resident, RepositoryError> {
        let txn = self.db.begin().await?;

        let user = user_entity::ActiveModel {
            user_name: Set(resident.user_name.clone()),
            password: Set(resident.password_digest.clone()),
            user_type: Set(UserRole::Resident.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let payload = resident_entity::ActiveModel {
            user_id: Set(user.id),
            resident_name: Set(resident.name.clone()),
            resident_address: Set(resident.address.clone()),
            resident_phone: Set(resident.phone),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(to_resident(user, payload))
    }

    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, RepositoryError> {
        driver_entity::Entity::find_by_id(id)
            .find_also_related(user_entity::Entity)
            .one(self.db.as_ref())
            .await?
            .map(join_driver)
            .transpose()
    }

    async fn find_resident(&self, id: i32) -> Result<Option<Resident>, RepositoryError> {
        resident_entity::Entity::find_by_id(id)
            .find_also_related(user_entity::Entity)
            .one(self.db.as_ref())
            .await?
            .map(join_resident)
            .transpose()
    }

    async fn find_driver_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<Driver>, RepositoryError> {
        let row = user_entity::Entity::find()
            .filter(user_entity::Column::UserName.eq(user_name))
            .find_also_related(driver_entity::Entity)
            .one(self.db.as_ref())
            .await?;

        // A resident with this name has no driver row
        Ok(match row {
            Some((user, Some(driver))) => Some(to_driver(user, driver)),
            _ => None,
        })
    }

    async fn find_resident_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<Resident>, RepositoryError> {
        let row = user_entity::Entity::find()
            .filter(user_entity::Column::UserName.eq(user_name))
            .find_also_related(resident_entity::Entity)
            .one(self.db.as_ref())
            .await?;

        Ok(match row {
            Some((user, Some(resident))) => Some(to_resident(user, resident)),
            _ => None,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let db = self.db.as_ref();
        match user_entity::Entity::find_by_id(id).one(db).await? {
            Some(user) => Ok(Some(Self::load_user(db, &user).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, user_name: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .find_credentials(user_name)
            .await?
            .map(|(user, _digest)| user))
    }

    async fn find_credentials(
        &self,
        user_name: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let db = self.db.as_ref();
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::UserName.eq(user_name))
            .one(db)
            .await?;

        match model {
            Some(model) => {
                let user = Self::load_user(db, &model).await?;
                Ok(Some((user, model.password)))
            }
            None => Ok(None),
        }
    }

    async fn username_exists(&self, user_name: &str) -> Result<bool, RepositoryError> {
        let count = user_entity::Entity::find()
            .filter(user_entity::Column::UserName.eq(user_name))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>, RepositoryError> {
        driver_entity::Entity::find()
            .find_also_related(user_entity::Entity)
            .order_by_asc(driver_entity::Column::UserId)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(join_driver)
            .collect()
    }

    async fn list_residents(&self) -> Result<Vec<Resident>, RepositoryError> {
        resident_entity::Entity::find()
            .find_also_related(user_entity::Entity)
            .order_by_asc(resident_entity::Column::UserId)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(join_resident)
            .collect()
    }

    async fn update_driver(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let txn = self.db.begin().await?;

        let (payload, user) = driver_entity::Entity::find_by_id(driver.id)
            .find_also_related(user_entity::Entity)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let user = user.ok_or_else(|| missing_payload(driver.id))?;

        let mut user: user_entity::ActiveModel = user.into();
        user.user_name = Set(driver.user_name.clone());
        let user = user.update(&txn).await?;

        let mut payload: driver_entity::ActiveModel = payload.into();
        payload.route_label = Set(driver.route_label.clone());
        payload.current_lat = Set(driver.current_lat);
        payload.current_lng = Set(driver.current_lng);
        let payload = payload.update(&txn).await?;

        txn.commit().await?;
        Ok(to_driver(user, payload))
    }

    async fn update_resident(&self, resident: &Resident) -> Result<Resident, RepositoryError> {
        let txn = self.db.begin().await?;

        let (payload, user) = resident_entity::Entity::find_by_id(resident.id)
            .find_also_related(user_entity::Entity)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let user = user.ok_or_else(|| missing_payload(resident.id))?;

        let mut user: user_entity::ActiveModel = user.into();
        user.user_name = Set(resident.user_name.clone());
        let user = user.update(&txn).await?;

        let mut payload: resident_entity::ActiveModel = payload.into();
        payload.resident_name = Set(resident.name.clone());
        payload.resident_address = Set(resident.address.clone());
        payload.resident_phone = Set(resident.phone);
        let payload = payload.update(&txn).await?;

        txn.commit().await?;
        Ok(to_resident(user, payload))
    }

    async fn update_driver_location(
        &self,
        id: i32,
        lat: f64,
        lng: f64,
    ) -> Result<Driver, RepositoryError> {
        let (payload, user) = driver_entity::Entity::find_by_id(id)
            .find_also_related(user_entity::Entity)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let user = user.ok_or_else(|| missing_payload(id))?;

        let mut payload: driver_entity::ActiveModel = payload.into();
        payload.current_lat = Set(Some(lat));
        payload.current_lng = Set(Some(lng));
        let payload = payload.update(self.db.as_ref()).await?;

        Ok(to_driver(user, payload))
    }
}
