// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 街道实体
///
/// 路线中的一段，居民的站点请求挂在街道上。创建后不会更换所属路线。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    #[serde(rename = "streetID")]
    pub id: i32,
    #[serde(rename = "routeID")]
    pub route_id: i32,
    #[serde(rename = "streetName")]
    pub name: String,
    #[serde(rename = "streetLocation")]
    pub location: String,
}

/// 待创建的街道（名称、位置描述）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStreet {
    pub name: String,
    pub location: String,
}

impl NewStreet {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}
