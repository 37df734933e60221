// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateDriverDto {
    #[serde(rename = "userName")]
    #[validate(length(min = 1, max = 20))]
    pub user_name: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(rename = "driverRoute")]
    pub route_label: Option<String>,
    #[serde(rename = "currentLat")]
    pub current_lat: Option<f64>,
    #[serde(rename = "currentLng")]
    pub current_lng: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateResidentDto {
    #[serde(rename = "userName")]
    #[validate(length(min = 1, max = 20))]
    pub user_name: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(rename = "residentName")]
    #[validate(length(max = 100))]
    pub name: String,
    #[serde(rename = "residentAddress")]
    #[validate(length(max = 200))]
    pub address: String,
    #[serde(rename = "residentPhone")]
    #[validate(range(min = 0))]
    pub phone: i64,
}

/// 司机资料的部分更新，`None` 表示保持原值
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateDriverDto {
    #[serde(rename = "userName")]
    #[validate(length(min = 1, max = 20))]
    pub user_name: Option<String>,
    #[serde(rename = "driverRoute")]
    pub route_label: Option<String>,
    #[serde(rename = "currentLat")]
    pub current_lat: Option<f64>,
    #[serde(rename = "currentLng")]
    pub current_lng: Option<f64>,
}

/// 居民资料的部分更新，`None` 表示保持原值
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateResidentDto {
    #[serde(rename = "userName")]
    #[validate(length(min = 1, max = 20))]
    pub user_name: Option<String>,
    #[serde(rename = "residentName")]
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[serde(rename = "residentAddress")]
    #[validate(length(max = 200))]
    pub address: Option<String>,
    #[serde(rename = "residentPhone")]
    #[validate(range(min = 0))]
    pub phone: Option<i64>,
}
