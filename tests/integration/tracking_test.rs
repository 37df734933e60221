// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_driver, create_resident, create_test_app, schedule, time};
use routetrack::application::dto::route_request::UpdateRouteDto;
use routetrack::application::use_cases::error::UseCaseError;
use std::collections::HashSet;

/// 指定路线时返回该路线全部街道上的站点
#[tokio::test]
async fn test_view_stops_for_route_flattens_streets() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let rob = create_resident(&app, "rob").await;
    let ann = create_resident(&app, "ann").await;
    let (route, streets) =
        schedule(&app, driver.id, &[("Oak St", "Zone A"), ("Elm St", "Zone B")]).await;
    let (_, other_streets) = schedule(&app, driver.id, &[("Ash St", "Zone C")]).await;

    let a = app.stops.request_stop(rob.id, streets[0].id, time(8, 15)).await.unwrap();
    let b = app.stops.request_stop(ann.id, streets[1].id, time(8, 20)).await.unwrap();
    let c = app
        .stops
        .request_stop(rob.id, other_streets[0].id, time(9, 0))
        .await
        .unwrap();

    let stops = app.tracking.view_stops(driver.id, Some(route.id)).await.unwrap();
    let ids: HashSet<i32> = stops.iter().map(|s| s.id).collect();
    assert_eq!(ids, HashSet::from([a.id, b.id]));

    let all = app.tracking.view_stops(driver.id, None).await.unwrap();
    let ids: HashSet<i32> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, HashSet::from([a.id, b.id, c.id]));
}

#[tokio::test]
async fn test_view_stops_is_empty_for_unknown_or_unowned_route() {
    let app = create_test_app().await;
    let owner = create_driver(&app, "owner").await;
    let other = create_driver(&app, "other").await;
    let resident = create_resident(&app, "rob").await;
    let (route, streets) = schedule(&app, owner.id, &[("Oak St", "Zone A")]).await;
    app.stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();

    assert!(app
        .tracking
        .view_stops(other.id, Some(route.id))
        .await
        .unwrap()
        .is_empty());
    assert!(app.tracking.view_stops(owner.id, Some(404)).await.unwrap().is_empty());
    assert!(app.tracking.view_stops(other.id, None).await.unwrap().is_empty());
    assert!(app.tracking.view_stops(404, None).await.unwrap().is_empty());
}

/// 追踪视图只包含 active 路线，位置在首次上报前为空
#[tokio::test]
async fn test_track_driver() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (first, _) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;
    schedule(&app, driver.id, &[("Elm St", "Zone B")]).await;

    let tracking = app.tracking.track_driver(resident.id, driver.id).await.unwrap();
    assert_eq!(tracking.driver.id, driver.id);
    assert_eq!(tracking.current_location.latitude, None);
    assert_eq!(tracking.current_location.longitude, None);
    assert!(tracking.active_routes.is_empty());

    app.routes
        .update_route(
            driver.id,
            first.id,
            UpdateRouteDto {
                status: Some("active".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    app.tracking
        .update_driver_location(driver.id, 40.7128, -74.006)
        .await
        .unwrap();

    let tracking = app.tracking.track_driver(resident.id, driver.id).await.unwrap();
    assert_eq!(tracking.current_location.latitude, Some(40.7128));
    assert_eq!(tracking.current_location.longitude, Some(-74.006));
    assert_eq!(tracking.active_routes.len(), 1);
    assert_eq!(tracking.active_routes[0].id, first.id);
}

#[tokio::test]
async fn test_track_unknown_driver() {
    let app = create_test_app().await;
    let resident = create_resident(&app, "rob").await;

    let result = app.tracking.track_driver(resident.id, 404).await;
    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Driver", .. })
    ));
}

/// 位置更新是无条件覆盖，不校验坐标范围
#[tokio::test]
async fn test_update_driver_location_overwrites() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;

    app.tracking
        .update_driver_location(driver.id, 1.0, 2.0)
        .await
        .unwrap();
    let updated = app
        .tracking
        .update_driver_location(driver.id, 123.0, -500.0)
        .await
        .unwrap();

    assert_eq!(updated.current_lat, Some(123.0));
    assert_eq!(updated.current_lng, Some(-500.0));
    assert_eq!(updated.user_name, "dave");

    let result = app.tracking.update_driver_location(404, 0.0, 0.0).await;
    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Driver", .. })
    ));
}

#[tokio::test]
async fn test_view_driver() {
    let app = create_test_app().await;
    let dave = create_driver(&app, "dave").await;
    let dora = create_driver(&app, "dora").await;
    let resident = create_resident(&app, "rob").await;

    let one = app.tracking.view_driver(resident.id, Some(dave.id)).await.unwrap();
    assert_eq!(one, vec![dave.clone()]);

    let all = app.tracking.view_driver(resident.id, None).await.unwrap();
    assert_eq!(all, vec![dave, dora]);

    // A resident id does not resolve to a driver
    let result = app.tracking.view_driver(resident.id, Some(resident.id)).await;
    assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
}
