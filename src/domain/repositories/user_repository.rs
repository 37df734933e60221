// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{Driver, NewDriver, NewResident, Resident, User};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 账户仓库特质
///
/// 定义司机与居民账户的数据访问接口。用户名在所有账户变体之间唯一。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建司机（基表与子类型表在同一事务中写入）
    async fn create_driver(&self, driver: &NewDriver) -> Result<Driver, RepositoryError>;
    /// 创建居民
    async fn create_resident(&self, resident: &NewResident) -> Result<Resident, RepositoryError>;
    /// 根据ID查找司机
    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, RepositoryError>;
    /// 根据ID查找居民
    async fn find_resident(&self, id: i32) -> Result<Option<Resident>, RepositoryError>;
    /// 根据用户名查找司机
    async fn find_driver_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<Driver>, RepositoryError>;
    /// 根据用户名查找居民
    async fn find_resident_by_username(
        &self,
        user_name: &str,
    ) -> Result<Option<Resident>, RepositoryError>;
    /// 根据ID查找任意账户
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    /// 根据用户名查找任意账户
    async fn find_by_username(&self, user_name: &str) -> Result<Option<User>, RepositoryError>;
    /// 读取账户及其凭证摘要，仅用于凭证校验
    async fn find_credentials(
        &self,
        user_name: &str,
    ) -> Result<Option<(User, String)>, RepositoryError>;
    /// 检查用户名是否已被占用
    async fn username_exists(&self, user_name: &str) -> Result<bool, RepositoryError>;
    /// 列出全部司机
    async fn list_drivers(&self) -> Result<Vec<Driver>, RepositoryError>;
    /// 列出全部居民
    async fn list_residents(&self) -> Result<Vec<Resident>, RepositoryError>;
    /// 覆盖写入司机资料（含用户名）
    async fn update_driver(&self, driver: &Driver) -> Result<Driver, RepositoryError>;
    /// 覆盖写入居民资料（含用户名）
    async fn update_resident(&self, resident: &Resident) -> Result<Resident, RepositoryError>;
    /// 覆盖写入司机当前位置
    async fn update_driver_location(
        &self,
        id: i32,
        lat: f64,
        lng: f64,
    ) -> Result<Driver, RepositoryError>;
}
