// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    count_routes, count_streets, create_driver, create_test_app, date, schedule, time,
};
use routetrack::application::dto::route_request::{ScheduleRouteDto, StreetDto, UpdateRouteDto};
use routetrack::application::use_cases::error::UseCaseError;
use routetrack::domain::models::route::NewRoute;
use routetrack::domain::models::status::RouteStatus;
use routetrack::domain::models::street::NewStreet;
use routetrack::domain::repositories::route_repository::RouteRepository;
use routetrack::domain::repositories::street_repository::StreetRepository;

/// 排班创建一条路线和对应数量的街道，全部指向新路线
#[tokio::test]
async fn test_schedule_route_creates_route_and_streets() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;

    let (route, streets) = schedule(
        &app,
        driver.id,
        &[("Oak St", "Zone A"), ("Elm St", "Zone B"), ("Ash St", "Zone C")],
    )
    .await;

    assert_eq!(route.driver_id, driver.id);
    assert_eq!(route.status, RouteStatus::Scheduled);
    assert_eq!(route.drive_date, date(2024, 6, 1));
    assert_eq!(route.drive_time, time(8, 0));
    assert_eq!(streets.len(), 3);
    assert!(streets.iter().all(|s| s.route_id == route.id));

    assert_eq!(count_routes(&app).await, 1);
    assert_eq!(count_streets(&app).await, 3);

    let stored = app.street_repo.find_by_route(route.id).await.unwrap();
    let names: Vec<&str> = stored.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Oak St", "Elm St", "Ash St"]);
}

#[tokio::test]
async fn test_schedule_route_without_streets() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;

    let (route, streets) = schedule(&app, driver.id, &[]).await;

    assert!(streets.is_empty());
    assert_eq!(count_routes(&app).await, 1);
    assert_eq!(count_streets(&app).await, 0);
    assert!(app.street_repo.find_by_route(route.id).await.unwrap().is_empty());
}

/// 中途写入失败时，路线与已写入的街道一起回滚
#[tokio::test]
async fn test_failed_street_insert_rolls_back_everything() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;

    let route = NewRoute {
        driver_id: driver.id,
        drive_date: date(2024, 6, 1),
        drive_time: time(8, 0),
    };
    // The second street violates the non-empty name constraint
    let streets = vec![NewStreet::new("Oak St", "Zone A"), NewStreet::new("", "Zone B")];

    let result = app.route_repo.create_with_streets(&route, &streets).await;

    assert!(result.is_err());
    assert_eq!(count_routes(&app).await, 0);
    assert_eq!(count_streets(&app).await, 0);
}

#[tokio::test]
async fn test_schedule_route_rejects_invalid_street() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;

    let result = app
        .routes
        .schedule_route(
            driver.id,
            ScheduleRouteDto {
                drive_date: date(2024, 6, 1),
                drive_time: time(8, 0),
                streets: vec![StreetDto::new("", "Zone A")],
            },
        )
        .await;

    assert!(matches!(result, Err(UseCaseError::Validation(_))));
    assert_eq!(count_routes(&app).await, 0);
}

#[tokio::test]
async fn test_schedule_route_for_unknown_driver() {
    let app = create_test_app().await;

    let result = app
        .routes
        .schedule_route(
            99,
            ScheduleRouteDto {
                drive_date: date(2024, 6, 1),
                drive_time: time(8, 0),
                streets: vec![],
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Driver", .. })
    ));
    assert_eq!(count_routes(&app).await, 0);
}

/// 非所属司机的修改被拒绝且路线保持不变
#[tokio::test]
async fn test_update_route_by_other_driver_is_not_permitted() {
    let app = create_test_app().await;
    let owner = create_driver(&app, "owner").await;
    let intruder = create_driver(&app, "intruder").await;
    let (route, _) = schedule(&app, owner.id, &[("Oak St", "Zone A")]).await;

    let result = app
        .routes
        .update_route(
            intruder.id,
            route.id,
            UpdateRouteDto {
                drive_date: Some(date(2024, 7, 1)),
                drive_time: Some(time(9, 30)),
                status: Some("active".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(UseCaseError::NotPermitted)));

    let stored = app.route_repo.find_by_id(route.id).await.unwrap().unwrap();
    assert_eq!(stored, route);
}

#[tokio::test]
async fn test_update_route_applies_only_supplied_fields() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let (route, _) = schedule(&app, driver.id, &[]).await;

    let updated = app
        .routes
        .update_route(
            driver.id,
            route.id,
            UpdateRouteDto {
                drive_time: Some(time(10, 15)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.drive_time, time(10, 15));
    assert_eq!(updated.drive_date, route.drive_date);
    assert_eq!(updated.status, RouteStatus::Scheduled);

    let stored = app.route_repo.find_by_id(route.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_route_follows_status_lifecycle() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let (route, _) = schedule(&app, driver.id, &[]).await;

    let set_status = |status: &str| UpdateRouteDto {
        status: Some(status.to_string()),
        ..Default::default()
    };

    let active = app
        .routes
        .update_route(driver.id, route.id, set_status("active"))
        .await
        .unwrap();
    assert_eq!(active.status, RouteStatus::Active);

    // Re-applying the current status is a no-op
    let same = app
        .routes
        .update_route(driver.id, route.id, set_status("active"))
        .await
        .unwrap();
    assert_eq!(same.status, RouteStatus::Active);

    let completed = app
        .routes
        .update_route(driver.id, route.id, set_status("completed"))
        .await
        .unwrap();
    assert_eq!(completed.status, RouteStatus::Completed);

    let result = app
        .routes
        .update_route(driver.id, route.id, set_status("scheduled"))
        .await;
    assert!(
        matches!(result, Err(UseCaseError::Conflict(ref msg)) if msg == "Route cannot move from completed to scheduled")
    );

    let stored = app.route_repo.find_by_id(route.id).await.unwrap().unwrap();
    assert_eq!(stored.status, RouteStatus::Completed);
}

#[tokio::test]
async fn test_update_route_rejects_unknown_status() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let (route, _) = schedule(&app, driver.id, &[]).await;

    let result = app
        .routes
        .update_route(
            driver.id,
            route.id,
            UpdateRouteDto {
                drive_date: Some(date(2025, 1, 1)),
                status: Some("paused".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(UseCaseError::Validation(_))));

    let stored = app.route_repo.find_by_id(route.id).await.unwrap().unwrap();
    assert_eq!(stored.drive_date, date(2024, 6, 1));
}

/// 空状态字符串视为未提供
#[tokio::test]
async fn test_update_route_ignores_empty_status() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let (route, _) = schedule(&app, driver.id, &[]).await;

    let updated = app
        .routes
        .update_route(
            driver.id,
            route.id,
            UpdateRouteDto {
                drive_time: Some(time(9, 45)),
                status: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, RouteStatus::Scheduled);
    assert_eq!(updated.drive_time, time(9, 45));

    let stored = app.route_repo.find_by_id(route.id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_missing_route() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;

    let result = app
        .routes
        .update_route(driver.id, 404, UpdateRouteDto::default())
        .await;

    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Route", .. })
    ));
}

/// 追加街道不校验调用者身份
#[tokio::test]
async fn test_add_street_to_route() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let (route, _) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let street = app
        .routes
        .add_street_to_route(route.id, StreetDto::new("Pine St", "Zone D"))
        .await
        .unwrap();

    assert_eq!(street.route_id, route.id);
    assert_eq!(street.name, "Pine St");
    assert_eq!(count_streets(&app).await, 2);

    let result = app
        .routes
        .add_street_to_route(404, StreetDto::new("Nowhere", "Zone X"))
        .await;
    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Route", .. })
    ));
    assert_eq!(count_streets(&app).await, 2);
}
