// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::{
        dto::account_request::{
            CreateDriverDto, CreateResidentDto, UpdateDriverDto, UpdateResidentDto,
        },
        use_cases::error::UseCaseError,
    },
    domain::{
        models::user::{Driver, NewDriver, NewResident, Resident, User},
        repositories::user_repository::UserRepository,
        services::credential_service::CredentialHasher,
    },
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

const USERNAME_TAKEN: &str = "Username already taken";

/// 账户管理用例
///
/// 创建、查询、修改司机与居民账户，并校验登录凭证。
/// 口令在进入仓库之前就被替换为摘要。
pub struct AccountUseCase<UR, H> {
    user_repo: Arc<UR>,
    hasher: Arc<H>,
}

impl<UR, H> AccountUseCase<UR, H>
where
    UR: UserRepository + 'static,
    H: CredentialHasher + 'static,
{
    pub fn new(user_repo: Arc<UR>, hasher: Arc<H>) -> Self {
        Self { user_repo, hasher }
    }

    /// 创建司机账户
    ///
    /// # 返回值
    ///
    /// * `Ok(Driver)` - 新账户
    /// * `Err(UseCaseError::Conflict)` - 用户名已被任一类型的账户占用
    pub async fn create_driver(&self, dto: CreateDriverDto) -> Result<Driver, UseCaseError> {
        dto.validate()?;
        self.ensure_username_free(&dto.user_name).await?;

        let driver = self
            .user_repo
            .create_driver(&NewDriver {
                user_name: dto.user_name,
                password_digest: self.hasher.hash(&dto.password)?,
                route_label: dto.route_label,
                current_lat: dto.current_lat,
                current_lng: dto.current_lng,
            })
            .await?;

        info!("Created driver {} ({})", driver.id, driver.user_name);
        Ok(driver)
    }

    /// 创建居民账户
    pub async fn create_resident(&self, dto: CreateResidentDto) -> Result<Resident, UseCaseError> {
        dto.validate()?;
        self.ensure_username_free(&dto.user_name).await?;

        let resident = self
            .user_repo
            .create_resident(&NewResident {
                user_name: dto.user_name,
                password_digest: self.hasher.hash(&dto.password)?,
                name: dto.name,
                address: dto.address,
                phone: dto.phone,
            })
            .await?;

        info!("Created resident {} ({})", resident.id, resident.user_name);
        Ok(resident)
    }

    pub async fn get_driver(&self, id: i32) -> Result<Driver, UseCaseError> {
        self.user_repo
            .find_driver(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Driver", id))
    }

    pub async fn get_resident(&self, id: i32) -> Result<Resident, UseCaseError> {
        self.user_repo
            .find_resident(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Resident", id))
    }

    pub async fn get_driver_by_username(&self, user_name: &str) -> Result<Driver, UseCaseError> {
        self.user_repo
            .find_driver_by_username(user_name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Driver", user_name))
    }

    pub async fn get_resident_by_username(
        &self,
        user_name: &str,
    ) -> Result<Resident, UseCaseError> {
        self.user_repo
            .find_resident_by_username(user_name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Resident", user_name))
    }

    pub async fn get_user(&self, id: i32) -> Result<User, UseCaseError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", id))
    }

    pub async fn get_user_by_username(&self, user_name: &str) -> Result<User, UseCaseError> {
        self.user_repo
            .find_by_username(user_name)
            .await?
            .ok_or_else(|| UseCaseError::not_found("User", user_name))
    }

    /// 全部账户，按ID升序
    pub async fn list_users(&self) -> Result<Vec<User>, UseCaseError> {
        let drivers = self.user_repo.list_drivers().await?;
        let residents = self.user_repo.list_residents().await?;

        let mut users: Vec<User> = drivers
            .into_iter()
            .map(User::Driver)
            .chain(residents.into_iter().map(User::Resident))
            .collect();
        users.sort_by_key(User::id);

        Ok(users)
    }

    /// 部分更新司机资料
    pub async fn update_driver(
        &self,
        id: i32,
        dto: UpdateDriverDto,
    ) -> Result<Driver, UseCaseError> {
        dto.validate()?;
        let mut driver = self.get_driver(id).await?;

        if let Some(user_name) = dto.user_name {
            if user_name != driver.user_name {
                self.ensure_username_free(&user_name).await?;
                driver.user_name = user_name;
            }
        }
        if let Some(label) = dto.route_label {
            driver.route_label = Some(label);
        }
        if let Some(lat) = dto.current_lat {
            driver.current_lat = Some(lat);
        }
        if let Some(lng) = dto.current_lng {
            driver.current_lng = Some(lng);
        }

        let driver = self.user_repo.update_driver(&driver).await?;
        info!("Updated driver {}", driver.id);
        Ok(driver)
    }

    /// 部分更新居民资料
    pub async fn update_resident(
        &self,
        id: i32,
        dto: UpdateResidentDto,
    ) -> Result<Resident, UseCaseError> {
        dto.validate()?;
        let mut resident = self.get_resident(id).await?;

        if let Some(user_name) = dto.user_name {
            if user_name != resident.user_name {
                self.ensure_username_free(&user_name).await?;
                resident.user_name = user_name;
            }
        }
        if let Some(name) = dto.name {
            resident.name = name;
        }
        if let Some(address) = dto.address {
            resident.address = address;
        }
        if let Some(phone) = dto.phone {
            resident.phone = phone;
        }

        let resident = self.user_repo.update_resident(&resident).await?;
        info!("Updated resident {}", resident.id);
        Ok(resident)
    }

    /// 校验登录凭证
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(User))` - 用户名存在且口令匹配
    /// * `Ok(None)` - 用户名不存在或口令不匹配，两种情况不作区分
    pub async fn authenticate(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<Option<User>, UseCaseError> {
        let Some((user, digest)) = self.user_repo.find_credentials(user_name).await? else {
            debug!("Login attempt for unknown user {}", user_name);
            return Ok(None);
        };

        if self.hasher.verify(password, &digest) {
            info!("User {} authenticated", user.id());
            Ok(Some(user))
        } else {
            warn!("Invalid credentials for user {}", user.id());
            Ok(None)
        }
    }

    async fn ensure_username_free(&self, user_name: &str) -> Result<(), UseCaseError> {
        if self.user_repo.username_exists(user_name).await? {
            warn!("Username {} is already taken", user_name);
            return Err(UseCaseError::conflict(USERNAME_TAKEN));
        }
        Ok(())
    }
}
