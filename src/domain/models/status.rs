// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 领域错误类型
///
/// 表示违反业务规则的情况，包括非法的状态转换与无法识别的状态值。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 状态机中不存在的转换
    #[error("{entity} cannot move from {from} to {to}")]
    InvalidStateTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    /// 终态实体不可再取消
    #[error("{0} cannot be cancelled (already completed or cancelled)")]
    NotCancellable(&'static str),

    /// 无法识别的状态字符串
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// 验证错误，当输入数据不符合领域规则时发生
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 路线状态枚举
///
/// 状态转换遵循以下流程：
/// Scheduled → Active → Completed，Scheduled/Active → Cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// 已排期
    #[default]
    Scheduled,
    /// 执行中
    Active,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl RouteStatus {
    /// 是否为终态
    pub fn is_terminal(self) -> bool {
        matches!(self, RouteStatus::Completed | RouteStatus::Cancelled)
    }

    /// 判断是否允许转换到目标状态
    ///
    /// 保持当前状态视为合法（无变化）
    pub fn can_transition_to(self, next: RouteStatus) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (RouteStatus::Scheduled, RouteStatus::Active)
                | (RouteStatus::Active, RouteStatus::Completed)
                | (RouteStatus::Scheduled, RouteStatus::Cancelled)
                | (RouteStatus::Active, RouteStatus::Cancelled)
        )
    }

    /// 校验并返回目标状态
    pub fn transition_to(self, next: RouteStatus) -> Result<RouteStatus, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidStateTransition {
                entity: "Route",
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteStatus::Scheduled => write!(f, "scheduled"),
            RouteStatus::Active => write!(f, "active"),
            RouteStatus::Completed => write!(f, "completed"),
            RouteStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for RouteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(RouteStatus::Scheduled),
            "active" => Ok(RouteStatus::Active),
            "completed" => Ok(RouteStatus::Completed),
            "cancelled" => Ok(RouteStatus::Cancelled),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// 站点状态枚举
///
/// 状态转换遵循以下流程：
/// Requested → Confirmed → Completed，Requested/Confirmed → Cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    /// 居民已请求
    #[default]
    Requested,
    /// 司机已确认
    Confirmed,
    /// 已完成收运
    Completed,
    /// 已取消
    Cancelled,
}

impl StopStatus {
    /// 是否为终态
    pub fn is_terminal(self) -> bool {
        matches!(self, StopStatus::Completed | StopStatus::Cancelled)
    }

    /// 判断是否允许转换到目标状态
    pub fn can_transition_to(self, next: StopStatus) -> bool {
        matches!(
            (self, next),
            (StopStatus::Requested, StopStatus::Confirmed)
                | (StopStatus::Confirmed, StopStatus::Completed)
                | (StopStatus::Requested, StopStatus::Cancelled)
                | (StopStatus::Confirmed, StopStatus::Cancelled)
        )
    }
}

impl fmt::Display for StopStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StopStatus::Requested => write!(f, "requested"),
            StopStatus::Confirmed => write!(f, "confirmed"),
            StopStatus::Completed => write!(f, "completed"),
            StopStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for StopStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(StopStatus::Requested),
            "confirmed" => Ok(StopStatus::Confirmed),
            "completed" => Ok(StopStatus::Completed),
            "cancelled" => Ok(StopStatus::Cancelled),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}
