// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::street::NewStreet;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 排班请求
///
/// 路线与其街道在同一事务中创建
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ScheduleRouteDto {
    #[serde(rename = "driveDate")]
    pub drive_date: NaiveDate,
    #[serde(rename = "driveTime")]
    pub drive_time: NaiveTime,
    #[serde(default)]
    #[validate(nested)]
    pub streets: Vec<StreetDto>,
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct StreetDto {
    #[serde(rename = "streetName")]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(rename = "streetLocation")]
    #[validate(length(max = 200))]
    pub location: String,
}

impl StreetDto {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl From<StreetDto> for NewStreet {
    fn from(dto: StreetDto) -> Self {
        NewStreet::new(dto.name, dto.location)
    }
}

/// 路线的部分更新
///
/// 省略的字段保持原值；`status` 使用小写状态名
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateRouteDto {
    #[serde(rename = "driveDate")]
    pub drive_date: Option<NaiveDate>,
    #[serde(rename = "driveTime")]
    pub drive_time: Option<NaiveTime>,
    pub status: Option<String>,
}
