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

//! Column catalogue and fixed-width row rendering.
//!
//! Every statistic the report can show is a [`Column`] variant carrying its
//! header, static width, alignment and value kind. Rows are rendered from a
//! mapping of column to already formatted cell text; columns are separated by
//! padding alone.
//!
//! The name column is the only column whose width depends on the data: it is
//! resolved per group through the same override mapping callers use to widen
//! any other column, so header, data and comparison rows stay aligned.

use crate::error::{ReportError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Width of the name column before any scenario names are considered.
pub const DEFAULT_NAME_WIDTH: usize = 4;

/// Columns of the main table, in display order.
pub const DEFAULT_COLUMNS: [Column; 6] = [
    Column::Name,
    Column::Ips,
    Column::Average,
    Column::Deviation,
    Column::Median,
    Column::Percentile(99),
];

/// Per-call width overrides, keyed by column.
pub type WidthOverrides = HashMap<Column, usize>;

/// Already formatted cell text for one row, keyed by column.
pub type Cells = HashMap<Column, String>;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Padded on the right.
    Left,
    /// Padded on the left.
    Right,
}

/// How the values of a column are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text, never scaled.
    Label,
    /// Run times, scaled with the duration unit table.
    Duration,
    /// Throughput, scaled with the count unit table.
    Count,
    /// Relative deviation rendered as a percentage.
    Deviation,
    /// Plain integer, never scaled.
    Integer,
}

/// A statistic that can be shown as a report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Scenario name.
    Name,
    /// Iterations per second.
    Ips,
    /// Mean run time.
    Average,
    /// Relative standard deviation.
    Deviation,
    /// Median run time.
    Median,
    /// Run time at a percentile (1 to 100).
    Percentile(u32),
    /// Fastest run time.
    Minimum,
    /// Slowest run time.
    Maximum,
    /// Number of samples.
    SampleSize,
    /// Most frequent run time(s).
    Mode,
}

impl Column {
    /// Every column, with the 99th percentile standing in for all percentiles.
    pub const CATALOGUE: [Column; 10] = [
        Column::Name,
        Column::Ips,
        Column::Average,
        Column::Deviation,
        Column::Median,
        Column::Percentile(99),
        Column::Minimum,
        Column::Maximum,
        Column::SampleSize,
        Column::Mode,
    ];

    /// Parses a column identifier such as `minimum`, `:sample_size` or `p95`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] naming the identifier if it
    /// does not denote a supported column.
    pub fn parse(identifier: &str) -> Result<Column> {
        let name = identifier.trim().trim_start_matches(':');
        let normalized = name.to_ascii_lowercase().replace('-', "_");

        let column = match normalized.as_str() {
            "name" => Column::Name,
            "ips" => Column::Ips,
            "average" | "mean" => Column::Average,
            "deviation" | "std_dev_ratio" => Column::Deviation,
            "median" => Column::Median,
            "minimum" | "min" => Column::Minimum,
            "maximum" | "max" => Column::Maximum,
            "sample_size" => Column::SampleSize,
            "mode" => Column::Mode,
            other => {
                let digits = other
                    .strip_prefix("percentile_")
                    .or_else(|| other.strip_prefix('p'))
                    .ok_or_else(|| ReportError::unknown_column(name))?;
                let percentile: u32 = digits
                    .parse()
                    .map_err(|_| ReportError::unknown_column(name))?;
                if !(1..=100).contains(&percentile) {
                    return Err(ReportError::configuration(
                        name,
                        "percentile must be between 1 and 100",
                    ));
                }
                Column::Percentile(percentile)
            }
        };

        Ok(column)
    }

    /// Returns the canonical identifier accepted by [`Column::parse`].
    pub fn identifier(&self) -> String {
        match self {
            Column::Name => "name".to_string(),
            Column::Ips => "ips".to_string(),
            Column::Average => "average".to_string(),
            Column::Deviation => "deviation".to_string(),
            Column::Median => "median".to_string(),
            Column::Percentile(p) => format!("p{}", p),
            Column::Minimum => "minimum".to_string(),
            Column::Maximum => "maximum".to_string(),
            Column::SampleSize => "sample_size".to_string(),
            Column::Mode => "mode".to_string(),
        }
    }

    /// Returns the header text.
    pub fn header(&self) -> String {
        match self {
            Column::Name => "Name".to_string(),
            Column::Ips => "ips".to_string(),
            Column::Average => "average".to_string(),
            Column::Deviation => "deviation".to_string(),
            Column::Median => "median".to_string(),
            Column::Percentile(p) => format!("{}{} %", p, ordinal_suffix(*p)),
            Column::Minimum => "minimum".to_string(),
            Column::Maximum => "maximum".to_string(),
            Column::SampleSize => "sample size".to_string(),
            Column::Mode => "mode".to_string(),
        }
    }

    /// Returns the static width of the column.
    pub fn default_width(&self) -> usize {
        match self {
            Column::Name => DEFAULT_NAME_WIDTH,
            Column::Ips => 13,
            Column::Deviation => 11,
            Column::Mode => 25,
            Column::Average
            | Column::Median
            | Column::Percentile(_)
            | Column::Minimum
            | Column::Maximum
            | Column::SampleSize => 15,
        }
    }

    /// Returns how cells of the column are aligned.
    pub fn alignment(&self) -> Alignment {
        match self {
            Column::Name => Alignment::Left,
            _ => Alignment::Right,
        }
    }

    /// Returns how values of the column are rendered.
    pub fn kind(&self) -> ValueKind {
        match self {
            Column::Name => ValueKind::Label,
            Column::Ips => ValueKind::Count,
            Column::Deviation => ValueKind::Deviation,
            Column::SampleSize => ValueKind::Integer,
            Column::Average
            | Column::Median
            | Column::Percentile(_)
            | Column::Minimum
            | Column::Maximum
            | Column::Mode => ValueKind::Duration,
        }
    }
}

impl FromStr for Column {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Column::parse(s)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())
    }
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Resolves the width of a column: an override wins over the static width.
pub fn width(column: Column, overrides: &WidthOverrides) -> usize {
    overrides
        .get(&column)
        .copied()
        .unwrap_or_else(|| column.default_width())
}

/// Computes the name column width for a group of scenario names.
///
/// The result is one wider than the longest name (or the `Name` header) so
/// at least one space always separates the name from the next column.
pub fn label_width<'a, I>(names: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| name.chars().count())
        .fold(DEFAULT_NAME_WIDTH, usize::max)
        + 1
}

/// Renders the cells of one row, padded to their column widths.
///
/// # Errors
///
/// Returns [`ReportError::MissingCell`] if `cells` lacks a value for one of
/// the requested columns.
pub fn render_cells(columns: &[Column], cells: &Cells, overrides: &WidthOverrides) -> Result<String> {
    let mut line = String::new();

    for column in columns {
        let cell = cells.get(column).ok_or_else(|| ReportError::MissingCell {
            column: column.header(),
        })?;
        line.push_str(&pad(cell, width(*column, overrides), column.alignment()));
    }

    Ok(line)
}

/// Renders one row, newline terminated.
///
/// # Errors
///
/// Returns [`ReportError::MissingCell`] if `cells` lacks a value for one of
/// the requested columns.
pub fn render_row(columns: &[Column], cells: &Cells, overrides: &WidthOverrides) -> Result<String> {
    let mut line = render_cells(columns, cells, overrides)?;
    line.push('\n');
    Ok(line)
}

/// Renders the header row for a set of columns, newline terminated.
pub fn render_header(columns: &[Column], overrides: &WidthOverrides) -> String {
    let mut line: String = columns
        .iter()
        .map(|column| pad(&column.header(), width(*column, overrides), column.alignment()))
        .collect();
    line.push('\n');
    line
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => format!("{:<width$}", text, width = width),
        Alignment::Right => format!("{:>width$}", text, width = width),
    }
}
