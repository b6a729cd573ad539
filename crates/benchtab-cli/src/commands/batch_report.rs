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

//! Batch report command - format several results files.

use super::write_output;
use crate::batch::{BatchConfig, BatchProcessor, BatchResults};
use crate::cli::ReportOptions;
use crate::error::CliError;
use benchtab_core::TextBlock;
use colored::Colorize;
use std::path::PathBuf;

/// Format every file in `files` and print the reports in input order.
///
/// Each report is preceded by a `==> FILE <==` banner. A per-file ✓/✗
/// summary goes to stderr.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the output cannot be
/// written, or any file failed to format.
pub fn batch_report(
    files: Vec<String>,
    parallel: bool,
    options: &ReportOptions,
) -> Result<(), CliError> {
    let config = options.to_config()?;
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    let processor = BatchProcessor::new(BatchConfig {
        parallel_threshold: if parallel { 1 } else { usize::MAX },
    });
    let results = processor.process(&paths, &config);

    write_output(&combined_blocks(&results), None)?;
    print_summary(&results);

    if results.has_failures() {
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total_files(),
        });
    }
    Ok(())
}

fn combined_blocks(results: &BatchResults) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    for file in &results.results {
        if let Ok(report) = &file.result {
            blocks.push(vec![format!("==> {} <==\n", file.path.display())]);
            blocks.extend(report.iter().cloned());
            blocks.push(vec!["\n".to_string()]);
        }
    }
    blocks
}

fn print_summary(results: &BatchResults) {
    eprintln!();
    for file in &results.results {
        match &file.result {
            Ok(_) => eprintln!("{} {}", "✓".green().bold(), file.path.display()),
            Err(e) => {
                eprintln!("{} {}", "✗".red().bold(), file.path.display());
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
    }
    eprintln!(
        "{} {} of {} files formatted in {} ms",
        "Summary:".bold(),
        results.success_count(),
        results.total_files(),
        results.elapsed_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileResult;

    #[test]
    fn test_combined_blocks_skip_failures() {
        let results = BatchResults {
            results: vec![
                FileResult {
                    path: PathBuf::from("a.json"),
                    result: Ok(vec![vec!["table\n".to_string()]]),
                },
                FileResult {
                    path: PathBuf::from("b.json"),
                    result: Err(CliError::InvalidInput("bad".to_string())),
                },
            ],
            elapsed_ms: 0,
        };

        let text = benchtab_core::render(&combined_blocks(&results));
        assert_eq!(text, "==> a.json <==\ntable\n\n");
    }
}
