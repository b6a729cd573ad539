// Dweve Benchtab - Benchmark Result Tables
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchtab Core
//!
//! Formatting engine for benchmark result tables. Takes the statistics a
//! benchmarking harness computed for each scenario and renders them as
//! aligned text, one block per benchmark input.
//!
//! ## Features
//!
//! - **Unit scaling**: one display unit per column, picked from the whole
//!   column (`best`, `largest`, `smallest`, `none` or a pinned unit)
//! - **Layout**: fixed-width columns with a name column sized to the longest
//!   scenario name of each group
//! - **Comparison**: scenarios ranked fastest first with `- 2.00x slower`
//!   ratios against the fastest one
//! - **Extended statistics**: optional block with minimum, maximum, sample
//!   size, mode and extra percentiles
//!
//! ## Usage
//!
//! ```
//! use benchtab_core::{format, render, ReportConfig, RunStatistics, ScenarioResult};
//!
//! let results = vec![
//!     ScenarioResult::new("First", RunStatistics::new(100.0, 10_000.0)),
//!     ScenarioResult::new("Second", RunStatistics::new(200.0, 5_000.0)),
//! ];
//!
//! let config = ReportConfig::default().with_extended_columns(["minimum", "maximum"]);
//! let report = render(&format(&results, &config).unwrap());
//! assert!(report.contains("Comparison:"));
//! ```
//!
//! Durations are in microseconds, throughput in iterations per second.

pub mod comparator;
pub mod config;
pub mod console;
pub mod error;
pub mod layout;
pub mod report;
pub mod scenario;
pub mod units;

pub use comparator::{compare, rank, slowdown, Slowdown};
pub use config::{ReportConfig, ResolvedConfig};
pub use console::{output, render, write_report};
pub use error::{ReportError, Result};
pub use layout::{Column, DEFAULT_COLUMNS};
pub use report::{format, TextBlock};
pub use scenario::{Mode, RunStatistics, ScenarioResult};
pub use units::{scale_units, Quantity, Scaling, Unit};
