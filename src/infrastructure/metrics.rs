// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 安装 Prometheus 导出器并注册业务计数器。未安装记录器时，
/// `counter!` 调用是空操作，因此测试无需初始化。
pub fn init_metrics(settings: &MetricsSettings) {
    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address '{}': {}. Metrics exporter disabled.",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!("routes_scheduled_total", "Total number of routes scheduled");
    describe_counter!(
        "stops_requested_total",
        "Total number of stops requested by residents"
    );
    describe_counter!(
        "stops_cancelled_total",
        "Total number of stops cancelled by residents"
    );
    describe_counter!(
        "driver_location_updates_total",
        "Total number of driver location updates"
    );
    describe_counter!(
        "domain_conflicts_total",
        "Total number of operations rejected by a lifecycle or uniqueness rule"
    );

    info!("Metrics exporter listening on {}", addr);
}
