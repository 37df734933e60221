// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod route_scheduling_test;
pub mod stop_workflow_test;
pub mod tracking_test;
