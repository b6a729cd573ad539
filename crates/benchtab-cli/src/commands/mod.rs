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

//! Command implementations for the Benchtab CLI.
//!
//! Shared I/O helpers live here: bounded file reading, decoding of result and
//! configuration files, and report output to stdout or a file.

mod batch_report;
mod columns;
mod completion;
mod report;

pub use batch_report::batch_report;
pub use columns::columns;
pub use completion::generate_completion;
pub use report::report;

use crate::error::CliError;
use benchtab_core::{ReportConfig, ScenarioResult, TextBlock};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Default maximum file size for reading (100 MB).
///
/// Can be overridden via the `BENCHTAB_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable that overrides [`DEFAULT_MAX_FILE_SIZE`] (in bytes).
pub const MAX_FILE_SIZE_ENV: &str = "BENCHTAB_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file into a string, refusing files above the size limit.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be inspected or read, and
/// [`CliError::FileTooLarge`] if it exceeds the limit configured through
/// `BENCHTAB_MAX_FILE_SIZE`.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Load a JSON array of scenario results.
pub fn load_results(path: impl AsRef<Path>) -> Result<Vec<ScenarioResult>, CliError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let results: Vec<ScenarioResult> =
        serde_json::from_str(&content).map_err(|e| CliError::json_error(path, e))?;
    debug!("Loaded {} scenario results from '{}'", results.len(), path.display());
    Ok(results)
}

/// Load a JSON report configuration. Missing fields keep their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig, CliError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::json_error(path, e))
}

/// Write report blocks to a file, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the output file cannot be created and
/// [`CliError::Report`] if writing the report fails.
pub fn write_output(blocks: &[TextBlock], path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            let mut file = fs::File::create(p).map_err(|e| CliError::io_error(p, e))?;
            benchtab_core::write_report(blocks, &mut file)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            benchtab_core::write_report(blocks, &mut handle)?;
        }
    }
    Ok(())
}
