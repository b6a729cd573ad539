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

//! Writing finished reports to a sink.
//!
//! Formatting never performs I/O; these helpers join the text blocks and
//! forward them to a writer. A failing sink becomes a
//! [`ReportError::Write`] instead of a panic.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::report::{format, TextBlock};
use crate::scenario::ScenarioResult;
use std::io::{self, Write};
use tracing::warn;

/// Joins text blocks into the full report text.
pub fn render(blocks: &[TextBlock]) -> String {
    blocks.iter().flatten().map(String::as_str).collect()
}

/// Writes text blocks to `writer` and flushes it.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the writer fails.
pub fn write_report<W: Write>(blocks: &[TextBlock], writer: &mut W) -> Result<()> {
    let text = render(blocks);

    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| {
            warn!("Failed to write report ({} bytes): {}", text.len(), e);
            ReportError::write(e)
        })
}

/// Formats a result set and writes it to standard output.
///
/// # Errors
///
/// Returns any formatting error, or [`ReportError::Write`] if standard
/// output cannot be written.
pub fn output(results: &[ScenarioResult], config: &ReportConfig) -> Result<()> {
    let blocks = format(results, config)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&blocks, &mut handle)
}
