// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use routetrack::application::use_cases::query_use_case::QueryUseCase;
use routetrack::config::settings::Settings;
use routetrack::infrastructure::database::connection;
use routetrack::infrastructure::repositories::route_repo_impl::RouteRepositoryImpl;
use routetrack::infrastructure::repositories::stop_repo_impl::StopRepositoryImpl;
use routetrack::infrastructure::repositories::street_repo_impl::StreetRepositoryImpl;
use routetrack::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use routetrack::infrastructure::services::argon2_hasher::Argon2Hasher;
use routetrack::utils::telemetry;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 初始化数据库：加载配置、建立连接、应用迁移，并输出当前数据概况
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting routetrack...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if settings.metrics.enabled {
        routetrack::infrastructure::metrics::init_metrics(&settings.metrics);
    }

    // Validate Argon2 parameters
    Argon2Hasher::new(&settings.auth)?;

    // 3. Connect to database and apply schema
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database initialized");

    // 4. Summarize what is stored
    let queries = QueryUseCase::new(
        Arc::new(UserRepositoryImpl::new(db.clone())),
        Arc::new(RouteRepositoryImpl::new(db.clone())),
        Arc::new(StreetRepositoryImpl::new(db.clone())),
        Arc::new(StopRepositoryImpl::new(db.clone())),
    );

    let drivers = queries.list_drivers().await?;
    let residents = queries.list_residents().await?;
    let active = queries.active_routes().await?;

    info!(
        "{} drivers, {} residents, {} active routes",
        drivers.len(),
        residents.len(),
        active.len()
    );

    Ok(())
}
