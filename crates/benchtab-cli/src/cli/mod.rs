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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: report commands (report, batch-report, columns)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use clap::{Parser, Subcommand};

pub use self::core::{CoreCommands, ReportOptions};
pub use utility::UtilityCommands;

/// Benchtab - console tables for benchmark results
///
/// Formats benchmark scenario results as aligned plain-text tables with an
/// optional comparison section and extended statistics.
///
/// # Examples
///
/// ```bash
/// # Format a results file
/// benchtab report results.json
///
/// # Pin all durations to milliseconds and add min/max columns
/// benchtab report results.json --scaling ms --extended minimum,maximum
///
/// # Format several files in parallel
/// benchtab batch-report runs/*.json --parallel
/// ```
#[derive(Parser)]
#[command(name = "benchtab")]
#[command(author, version, about = "Benchtab - console tables for benchmark results", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the selected command.
    pub fn execute(self) -> Result<(), crate::error::CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
