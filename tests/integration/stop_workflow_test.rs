// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    count_stops, create_driver, create_resident, create_test_app, schedule, time,
};
use routetrack::application::use_cases::error::UseCaseError;
use routetrack::domain::models::status::StopStatus;
use routetrack::domain::repositories::stop_repository::StopRepository;

const CANNOT_CANCEL: &str = "Stop cannot be cancelled (already completed or cancelled)";

#[tokio::test]
async fn test_request_stop_creates_requested_stop() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();

    assert_eq!(stop.status, StopStatus::Requested);
    assert_eq!(stop.resident_id, resident.id);
    assert_eq!(stop.street_id, streets[0].id);
    assert_eq!(stop.stop_time, time(8, 15));
    assert_eq!(count_stops(&app).await, 1);
}

/// 同一居民在同一街道上重复申请返回冲突且不新增记录
#[tokio::test]
async fn test_duplicate_request_is_a_conflict() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    app.stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();
    let second = app
        .stops
        .request_stop(resident.id, streets[0].id, time(9, 0))
        .await;

    assert!(
        matches!(second, Err(UseCaseError::Conflict(ref msg)) if msg == "Stop already requested for this street")
    );
    assert_eq!(count_stops(&app).await, 1);
}

#[tokio::test]
async fn test_uniqueness_is_per_resident_and_street() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let rob = create_resident(&app, "rob").await;
    let ann = create_resident(&app, "ann").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A"), ("Elm St", "Zone B")]).await;

    app.stops
        .request_stop(rob.id, streets[0].id, time(8, 15))
        .await
        .unwrap();
    app.stops
        .request_stop(rob.id, streets[1].id, time(8, 30))
        .await
        .unwrap();
    app.stops
        .request_stop(ann.id, streets[0].id, time(8, 20))
        .await
        .unwrap();

    assert_eq!(count_stops(&app).await, 3);
}

/// 取消后名额被释放，可以重新申请
#[tokio::test]
async fn test_cancelled_stop_frees_the_slot() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let first = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();
    app.stops.cancel_stop(resident.id, first.id).await.unwrap();

    let second = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 45))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(second.status, StopStatus::Requested);
    assert_eq!(count_stops(&app).await, 2);
}

#[tokio::test]
async fn test_request_stop_on_unknown_street_or_resident() {
    let app = create_test_app().await;
    let resident = create_resident(&app, "rob").await;
    let driver = create_driver(&app, "dave").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let result = app.stops.request_stop(resident.id, 404, time(8, 0)).await;
    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Street", .. })
    ));

    // A driver id is not a resident
    let result = app
        .stops
        .request_stop(driver.id, streets[0].id, time(8, 0))
        .await;
    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Resident", .. })
    ));

    assert_eq!(count_stops(&app).await, 0);
}

/// 从 requested 与 confirmed 都可以取消，重复取消返回冲突
#[tokio::test]
async fn test_cancel_from_open_states() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A"), ("Elm St", "Zone B")]).await;

    let requested = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();
    let cancelled = app.stops.cancel_stop(resident.id, requested.id).await.unwrap();
    assert_eq!(cancelled.status, StopStatus::Cancelled);

    let retry = app.stops.cancel_stop(resident.id, requested.id).await;
    assert!(matches!(retry, Err(UseCaseError::Conflict(ref msg)) if msg == CANNOT_CANCEL));

    let confirmed = app
        .stops
        .request_stop(resident.id, streets[1].id, time(8, 30))
        .await
        .unwrap();
    app.stops.confirm_stop(driver.id, confirmed.id).await.unwrap();
    let cancelled = app.stops.cancel_stop(resident.id, confirmed.id).await.unwrap();
    assert_eq!(cancelled.status, StopStatus::Cancelled);
}

#[tokio::test]
async fn test_completed_stop_cannot_be_cancelled() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();
    app.stops.confirm_stop(driver.id, stop.id).await.unwrap();
    let completed = app.stops.complete_stop(driver.id, stop.id).await.unwrap();
    assert_eq!(completed.status, StopStatus::Completed);

    let result = app.stops.cancel_stop(resident.id, stop.id).await;
    assert!(matches!(result, Err(UseCaseError::Conflict(ref msg)) if msg == CANNOT_CANCEL));

    let stored = app.stop_repo.find_by_id(stop.id).await.unwrap().unwrap();
    assert_eq!(stored.status, StopStatus::Completed);
}

#[tokio::test]
async fn test_cancel_by_other_resident_is_not_permitted() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let rob = create_resident(&app, "rob").await;
    let ann = create_resident(&app, "ann").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(rob.id, streets[0].id, time(8, 15))
        .await
        .unwrap();

    let result = app.stops.cancel_stop(ann.id, stop.id).await;
    assert!(matches!(result, Err(UseCaseError::NotPermitted)));

    let stored = app.stop_repo.find_by_id(stop.id).await.unwrap().unwrap();
    assert_eq!(stored.status, StopStatus::Requested);
}

#[tokio::test]
async fn test_cancel_missing_stop() {
    let app = create_test_app().await;
    let resident = create_resident(&app, "rob").await;

    let result = app.stops.cancel_stop(resident.id, 404).await;
    assert!(matches!(
        result,
        Err(UseCaseError::NotFound { entity: "Stop", .. })
    ));
}

/// 司机只能推进自己路线上的站点，且必须按顺序推进
#[tokio::test]
async fn test_driver_progression_checks_route_owner_and_order() {
    let app = create_test_app().await;
    let owner = create_driver(&app, "owner").await;
    let other = create_driver(&app, "other").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, owner.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();

    let result = app.stops.confirm_stop(other.id, stop.id).await;
    assert!(matches!(result, Err(UseCaseError::NotPermitted)));

    // requested -> completed skips confirmation
    let result = app.stops.complete_stop(owner.id, stop.id).await;
    assert!(
        matches!(result, Err(UseCaseError::Conflict(ref msg)) if msg == "Stop cannot move from requested to completed")
    );

    let confirmed = app.stops.confirm_stop(owner.id, stop.id).await.unwrap();
    assert_eq!(confirmed.status, StopStatus::Confirmed);

    let result = app.stops.confirm_stop(owner.id, stop.id).await;
    assert!(matches!(result, Err(UseCaseError::Conflict(_))));
}

/// 状态更新以当前状态为条件，已被修改的站点不会被覆盖
#[tokio::test]
async fn test_status_update_requires_expected_current_status() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();
    app.stops.cancel_stop(resident.id, stop.id).await.unwrap();

    let stale = app
        .stop_repo
        .update_status(stop.id, StopStatus::Requested, StopStatus::Confirmed)
        .await
        .unwrap();
    assert!(stale.is_none());

    let stored = app.stop_repo.find_by_id(stop.id).await.unwrap().unwrap();
    assert_eq!(stored.status, StopStatus::Cancelled);

    let missing = app
        .stop_repo
        .update_status(9999, StopStatus::Requested, StopStatus::Cancelled)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_concurrent_cancels_succeed_once() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();

    let (first, second) = tokio::join!(
        app.stops.cancel_stop(resident.id, stop.id),
        app.stops.cancel_stop(resident.id, stop.id)
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(UseCaseError::Conflict(ref msg)) if msg == CANNOT_CANCEL)));

    let stored = app.stop_repo.find_by_id(stop.id).await.unwrap().unwrap();
    assert_eq!(stored.status, StopStatus::Cancelled);
}

/// 司机确认与居民取消并发时只有一个生效
#[tokio::test]
async fn test_confirm_racing_cancel_applies_one_transition() {
    let app = create_test_app().await;
    let driver = create_driver(&app, "dave").await;
    let resident = create_resident(&app, "rob").await;
    let (_, streets) = schedule(&app, driver.id, &[("Oak St", "Zone A")]).await;

    let stop = app
        .stops
        .request_stop(resident.id, streets[0].id, time(8, 15))
        .await
        .unwrap();

    let (cancelled, confirmed) = tokio::join!(
        app.stops.cancel_stop(resident.id, stop.id),
        app.stops.confirm_stop(driver.id, stop.id)
    );

    let stored = app.stop_repo.find_by_id(stop.id).await.unwrap().unwrap();
    match (cancelled, confirmed) {
        (Ok(_), Err(UseCaseError::Conflict(_))) => {
            assert_eq!(stored.status, StopStatus::Cancelled)
        }
        // cancel after confirm is still a valid transition
        (Ok(_), Ok(_)) => assert_eq!(stored.status, StopStatus::Cancelled),
        (Err(UseCaseError::Conflict(_)), Ok(_)) => {
            assert_eq!(stored.status, StopStatus::Confirmed)
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
