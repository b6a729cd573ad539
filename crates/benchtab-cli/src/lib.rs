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

//! Benchtab CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **report**: format one JSON results file as console tables
//! - **batch-report**: format several results files, optionally in parallel
//! - **columns**: list the supported column identifiers
//! - **completion**: generate shell completion scripts
//!
//! # Example
//!
//! ```no_run
//! use benchtab_cli::cli::ReportOptions;
//! use benchtab_cli::commands::report;
//!
//! # fn main() -> Result<(), benchtab_cli::error::CliError> {
//! let options = ReportOptions {
//!     scaling: Some("ms".to_string()),
//!     extended: vec!["minimum".to_string(), "maximum".to_string()],
//!     ..Default::default()
//! };
//! report("results.json", Some("report.txt"), &options)?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
