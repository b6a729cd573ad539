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

//! Error types for report formatting.
//!
//! Every failure the formatter can produce is a configuration or programmer
//! error surfaced synchronously; the only runtime failure mode is writing the
//! finished report to a sink, which is converted into [`ReportError::Write`].

use thiserror::Error;

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while formatting or writing a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// An unknown column, unit or width override was requested.
    ///
    /// Raised before any output is produced.
    #[error("Invalid configuration '{identifier}': {reason}")]
    Configuration {
        /// The offending identifier, without any leading `:`.
        identifier: String,
        /// Why the identifier was rejected.
        reason: String,
    },

    /// A slowdown ratio was requested against a scenario whose throughput is
    /// zero, negative or not finite.
    #[error("Cannot compare against '{scenario}': throughput is not a positive finite number")]
    Division {
        /// Name of the scenario with unusable throughput.
        scenario: String,
    },

    /// A row was rendered without a value for one of its columns.
    #[error("No value supplied for column '{column}'")]
    MissingCell {
        /// Header of the column without a value.
        column: String,
    },

    /// Writing the report to its sink failed.
    #[error("{message}")]
    Write {
        /// Description of the failure.
        message: String,
    },
}

impl ReportError {
    /// Create a configuration error for an identifier.
    pub fn configuration(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error for an unrecognized column identifier.
    pub fn unknown_column(identifier: impl Into<String>) -> Self {
        Self::configuration(identifier, "unknown column")
    }

    /// Convert a sink failure into a write error.
    pub fn write(source: std::io::Error) -> Self {
        Self::Write {
            message: format!("unknown error while writing report: {}", source),
        }
    }

    /// Returns true for errors caused by the report configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ReportError::Configuration { .. })
    }
}
