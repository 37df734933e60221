// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::route::Route;
use crate::domain::models::user::Driver;
use serde::Serialize;

/// 司机的最后已知坐标，首次上报前两者皆为空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// 居民追踪司机时看到的组合视图
///
/// `current_route` 是司机自填的路线标签，与 `active_routes` 中的路线记录互不关联。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverTracking {
    pub driver: Driver,
    pub current_location: Location,
    pub current_route: Option<String>,
    pub active_routes: Vec<Route>,
}

impl DriverTracking {
    pub fn new(driver: Driver, active_routes: Vec<Route>) -> Self {
        Self {
            current_location: Location {
                latitude: driver.current_lat,
                longitude: driver.current_lng,
            },
            current_route: driver.route_label.clone(),
            driver,
            active_routes,
        }
    }
}
