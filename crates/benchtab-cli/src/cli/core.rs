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

//! Report commands for the Benchtab CLI.

use crate::commands;
use crate::error::CliError;
use benchtab_core::{ReportConfig, Scaling};
use clap::{Args, Subcommand};

/// Options shared by every command that formats a report.
///
/// Flags override values loaded from `--config`, which in turn override the
/// built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportOptions {
    /// JSON report configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Unit scaling: best, largest, smallest, none, or a unit such as ms
    #[arg(short, long, value_name = "STRATEGY")]
    pub scaling: Option<String>,

    /// Omit the comparison section
    #[arg(long)]
    pub no_comparison: bool,

    /// Extended statistics columns (comma-separated, e.g. minimum,maximum,mode)
    #[arg(short, long, value_delimiter = ',', value_name = "COLUMNS")]
    pub extended: Vec<String>,

    /// Column width override as COLUMN=WIDTH (repeatable)
    #[arg(short, long = "width", value_name = "COLUMN=WIDTH")]
    pub widths: Vec<String>,
}

impl ReportOptions {
    /// Build the effective report configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded, a width
    /// override is malformed, or the resulting configuration is invalid.
    pub fn to_config(&self) -> Result<ReportConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => commands::load_config(path)?,
            None => ReportConfig::default(),
        };

        if self.no_comparison {
            config = config.with_comparison(false);
        }
        if let Some(scaling) = &self.scaling {
            config = config.with_unit_scaling(Scaling::from(scaling.clone()));
        }
        if !self.extended.is_empty() {
            config = config.with_extended_columns(self.extended.iter().map(|c| c.trim()));
        }
        for entry in &self.widths {
            let (column, width) = parse_width(entry)?;
            config = config.with_column_width(column, width);
        }

        config.resolve()?;
        Ok(config)
    }
}

fn parse_width(entry: &str) -> Result<(&str, usize), CliError> {
    let invalid = || {
        CliError::InvalidInput(format!(
            "width override '{}' must look like COLUMN=WIDTH",
            entry
        ))
    };
    let (column, width) = entry.split_once('=').ok_or_else(invalid)?;
    let width = width.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok((column.trim(), width))
}

/// Report commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Format a benchmark results file as console tables
    ///
    /// Reads a JSON array of scenario results and prints one table per
    /// input, followed by the comparison and extended sections.
    Report {
        /// Input results file (JSON)
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        #[command(flatten)]
        options: ReportOptions,
    },

    /// Format several results files
    ///
    /// Each file is formatted independently and printed under a
    /// `==> FILE <==` banner. Fails if any file fails.
    BatchReport {
        /// Input results files (JSON)
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<String>,

        /// Render files in parallel
        #[arg(short, long)]
        parallel: bool,

        #[command(flatten)]
        options: ReportOptions,
    },

    /// List the supported column identifiers
    Columns,
}

impl CoreCommands {
    /// Execute the report command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Report {
                file,
                output,
                options,
            } => commands::report(&file, output.as_deref(), &options),
            CoreCommands::BatchReport {
                files,
                parallel,
                options,
            } => commands::batch_report(files, parallel, &options),
            CoreCommands::Columns => commands::columns(),
        }
    }
}
