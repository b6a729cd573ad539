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

//! Report command - format one results file.

use super::{load_results, write_output};
use crate::cli::ReportOptions;
use crate::error::CliError;
use tracing::info;

/// Format the scenario results in `file` and write the report.
///
/// The configuration is resolved before the input is read, so an invalid
/// column or unit is reported even when the input file is missing.
///
/// # Examples
///
/// ```no_run
/// use benchtab_cli::cli::ReportOptions;
/// use benchtab_cli::commands::report;
///
/// # fn main() -> Result<(), benchtab_cli::error::CliError> {
/// report("results.json", None, &ReportOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn report(file: &str, output: Option<&str>, options: &ReportOptions) -> Result<(), CliError> {
    let config = options.to_config()?;
    let results = load_results(file)?;

    let blocks = benchtab_core::format(&results, &config)?;
    info!(
        "Formatted {} scenarios from '{}' into {} blocks",
        results.len(),
        file,
        blocks.len()
    );

    write_output(&blocks, output)
}
