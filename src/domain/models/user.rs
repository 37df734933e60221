// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::status::DomainError;

/// 账户角色
///
/// 作为账户的类型判别字段持久化（`user_type` 列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// 司机
    Driver,
    /// 居民
    Resident,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UserRole::Driver => write!(f, "driver"),
            UserRole::Resident => write!(f, "resident"),
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(UserRole::Driver),
            "resident" => Ok(UserRole::Resident),
            other => Err(DomainError::ValidationError(format!(
                "unknown user type: {}",
                other
            ))),
        }
    }
}

/// 司机账户
///
/// 序列化时携带 `user_type = "driver"` 判别字段。
/// `route_label` 是自由文本提示，与司机名下的路线记录互相独立。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type", rename = "driver")]
pub struct Driver {
    #[serde(rename = "userID")]
    pub id: i32,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "driverRoute")]
    pub route_label: Option<String>,
    #[serde(rename = "currentLng")]
    pub current_lng: Option<f64>,
    #[serde(rename = "currentLat")]
    pub current_lat: Option<f64>,
}

/// 居民账户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type", rename = "resident")]
pub struct Resident {
    #[serde(rename = "userID")]
    pub id: i32,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "residentName")]
    pub name: String,
    #[serde(rename = "residentAddress")]
    pub address: String,
    #[serde(rename = "residentPhone")]
    pub phone: i64,
}

/// 账户
///
/// 司机与居民共享同一个标识空间和唯一用户名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum User {
    Driver(Driver),
    Resident(Resident),
}

impl User {
    pub fn id(&self) -> i32 {
        match self {
            User::Driver(driver) => driver.id,
            User::Resident(resident) => resident.id,
        }
    }

    pub fn user_name(&self) -> &str {
        match self {
            User::Driver(driver) => &driver.user_name,
            User::Resident(resident) => &resident.user_name,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            User::Driver(_) => UserRole::Driver,
            User::Resident(_) => UserRole::Resident,
        }
    }
}

/// 待创建的司机
///
/// `password_digest` 必须是凭证哈希器产生的摘要，绝不能是明文
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub user_name: String,
    pub password_digest: String,
    pub route_label: Option<String>,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
}

/// 待创建的居民
#[derive(Debug, Clone)]
pub struct NewResident {
    pub user_name: String,
    pub password_digest: String,
    pub name: String,
    pub address: String,
    pub phone: i64,
}
