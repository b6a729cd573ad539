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

//! Batch rendering of several result files.
//!
//! Each file is formatted independently with the same [`ReportConfig`].
//! Small batches run serially; when parallelism is requested the files are
//! spread over the Rayon thread pool. Results always come back in input
//! order, so the combined output is deterministic either way.

use crate::commands::load_results;
use crate::error::CliError;
use benchtab_core::{ReportConfig, TextBlock};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Configuration for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum number of files before parallel processing kicks in.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4,
        }
    }
}

/// The outcome of rendering a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    /// The input file
    pub path: PathBuf,
    /// The formatted report, or the reason it could not be produced
    pub result: Result<Vec<TextBlock>, CliError>,
}

impl FileResult {
    /// Whether the file rendered successfully.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregated results of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResults {
    /// Per-file results, in input order
    pub results: Vec<FileResult>,
    /// Wall-clock time of the whole batch
    pub elapsed_ms: u128,
}

impl BatchResults {
    /// Get the total number of files processed.
    pub fn total_files(&self) -> usize {
        self.results.len()
    }

    /// Get the number of files that rendered successfully.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Get the number of files that failed.
    pub fn failure_count(&self) -> usize {
        self.total_files() - self.success_count()
    }

    /// Check if any file failed.
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| !r.is_success())
    }

    /// Iterator over the failed files.
    pub fn failures(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// Renders reports for many files with a shared configuration.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a processor with the given configuration.
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Render every file, choosing serial or parallel execution from the
    /// batch size.
    pub fn process(&self, files: &[PathBuf], report: &ReportConfig) -> BatchResults {
        let start_time = Instant::now();

        let results = if files.len() < self.config.parallel_threshold {
            debug!(files = files.len(), "rendering batch serially");
            files.iter().map(|path| render_file(path, report)).collect()
        } else {
            debug!(files = files.len(), "rendering batch in parallel");
            files
                .par_iter()
                .map(|path| render_file(path, report))
                .collect()
        };

        BatchResults {
            results,
            elapsed_ms: start_time.elapsed().as_millis(),
        }
    }
}

fn render_file(path: &Path, config: &ReportConfig) -> FileResult {
    let result = load_results(path)
        .and_then(|results| benchtab_core::format(&results, config).map_err(CliError::from));
    FileResult {
        path: path.to_path_buf(),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RESULTS: &str = r#"[
        {"name": "fast", "statistics": {"average": 100.0, "median": 100.0, "ips": 10000.0, "std_dev_ratio": 0.1}},
        {"name": "slow", "statistics": {"average": 200.0, "median": 190.0, "ips": 5000.0, "std_dev_ratio": 0.2}}
    ]"#;

    fn write_files(dir: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let path = dir.path().join(format!("run_{}.json", i));
                fs::write(&path, RESULTS).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let dir = TempDir::new().unwrap();
        let files = write_files(&dir, 6);
        let config = ReportConfig::default();

        let serial = BatchProcessor::new(BatchConfig {
            parallel_threshold: usize::MAX,
        })
        .process(&files, &config);
        let parallel = BatchProcessor::new(BatchConfig {
            parallel_threshold: 1,
        })
        .process(&files, &config);

        assert_eq!(serial.success_count(), 6);
        for (a, b) in serial.results.iter().zip(&parallel.results) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.result.as_ref().unwrap(), b.result.as_ref().unwrap());
        }
    }

    #[test]
    fn test_failures_are_collected() {
        let dir = TempDir::new().unwrap();
        let mut files = write_files(&dir, 2);
        files.push(dir.path().join("missing.json"));

        let results = BatchProcessor::default().process(&files, &ReportConfig::default());
        assert_eq!(results.total_files(), 3);
        assert_eq!(results.failure_count(), 1);
        assert!(results.has_failures());
        let failed: Vec<_> = results.failures().collect();
        assert!(failed[0].path.ends_with("missing.json"));
        assert!(matches!(failed[0].result, Err(CliError::Io { .. })));
    }

    #[test]
    fn test_configuration_error_fails_every_file() {
        let dir = TempDir::new().unwrap();
        let files = write_files(&dir, 2);
        let config = ReportConfig::default().with_extended_columns(["bogus"]);

        let results = BatchProcessor::default().process(&files, &config);
        assert_eq!(results.failure_count(), 2);
    }
}
