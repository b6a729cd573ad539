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

//! Report assembly.
//!
//! Turns a complete result set into text blocks, one per input group in
//! order of first appearance. Each block is a sequence of newline-terminated
//! strings:
//!
//! ```text
//! ##### With input Big #####        (only when the group has an input)
//!
//! Name                  ips        average  deviation         median         99th %
//! flat_map           2.34 K      427.54 μs     ±8.32%      420.02 μs        0.69 ms
//! map.flatten        1.26 K      794.65 μs    ±18.45%      718.99 μs        1.52 ms
//!
//! Comparison:
//! flat_map           2.34 K
//! map.flatten        1.26 K - 1.86x slower
//!
//! Extended options:                 (only when extended columns are configured)
//! ...
//! ```
//!
//! Every numeric column is rendered in one unit chosen from that column's
//! values across the whole group.

use crate::comparator::{compare, rank};
use crate::config::{ReportConfig, ResolvedConfig};
use crate::error::Result;
use crate::layout::{
    label_width, render_cells, render_header, render_row, Cells, Column, ValueKind,
    WidthOverrides, DEFAULT_COLUMNS,
};
use crate::scenario::{RunStatistics, ScenarioResult};
use crate::units::{
    format_deviation, format_integer, format_number, scale_units, Quantity, Scaling, Unit,
    NOT_AVAILABLE,
};
use std::collections::HashMap;
use tracing::debug;

/// The lines of one input group.
pub type TextBlock = Vec<String>;

/// Columns shown in the comparison block.
const COMPARISON_COLUMNS: [Column; 2] = [Column::Name, Column::Ips];

/// Formats a result set into one text block per input group.
///
/// The configuration is resolved before anything is rendered, so a
/// configuration error never comes with partial output.
///
/// # Errors
///
/// - [`ReportError::Configuration`](crate::ReportError::Configuration) for an
///   unknown column, unit or width override
/// - [`ReportError::Division`](crate::ReportError::Division) when a scenario
///   whose throughput is zero, negative or not finite has to be compared
///
/// # Example
///
/// ```
/// use benchtab_core::{format, ReportConfig, RunStatistics, ScenarioResult};
///
/// let results = vec![
///     ScenarioResult::new("First", RunStatistics::new(100.0, 10_000.0)),
///     ScenarioResult::new("Second", RunStatistics::new(200.0, 5_000.0)),
/// ];
///
/// let blocks = format(&results, &ReportConfig::default()).unwrap();
/// assert_eq!(blocks.len(), 1);
/// assert!(blocks[0].iter().any(|line| line.contains("2.00x slower")));
/// ```
pub fn format(results: &[ScenarioResult], config: &ReportConfig) -> Result<Vec<TextBlock>> {
    let config = config.resolve()?;

    group_by_input(results)
        .into_iter()
        .map(|group| format_group(&group, &config))
        .collect()
}

/// Scenarios sharing one input, in input order.
struct Group<'a> {
    input: Option<&'a str>,
    scenarios: Vec<&'a ScenarioResult>,
}

fn group_by_input(results: &[ScenarioResult]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();

    for scenario in results {
        let input = scenario.input_name();
        let position = *index.entry(input).or_insert_with(|| {
            groups.push(Group {
                input,
                scenarios: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].scenarios.push(scenario);
    }

    groups
}

fn format_group(group: &Group<'_>, config: &ResolvedConfig) -> Result<TextBlock> {
    let ranked = rank(group.scenarios.iter().copied());

    let mut widths = config.widths.clone();
    widths.insert(
        Column::Name,
        label_width(ranked.iter().map(|scenario| scenario.name.as_str())),
    );

    let units = ColumnUnits::compute(
        &ranked,
        DEFAULT_COLUMNS.iter().chain(&config.extended),
        &config.scaling,
    );

    debug!(
        "Formatting group {:?}: {} scenarios, ips in '{}', average in '{}'",
        group.input.unwrap_or("<no input>"),
        ranked.len(),
        units.unit(Column::Ips).map_or("", |unit| unit.symbol),
        units.unit(Column::Average).map_or("", |unit| unit.symbol),
    );

    let mut lines = TextBlock::new();

    if let Some(input) = group.input {
        lines.push(format!("\n##### With input {} #####\n", input));
    }

    lines.push(format!("\n{}", render_header(&DEFAULT_COLUMNS, &widths)));
    for scenario in &ranked {
        let cells = units.cells(scenario, &DEFAULT_COLUMNS);
        lines.push(render_row(&DEFAULT_COLUMNS, &cells, &widths)?);
    }

    if config.comparison && ranked.len() > 1 {
        lines.extend(comparison_block(&ranked, &units, &widths)?);
    }

    if !config.extended.is_empty() {
        lines.extend(extended_block(&ranked, &config.extended, &units, &widths)?);
    }

    Ok(lines)
}

fn comparison_block(
    ranked: &[&ScenarioResult],
    units: &ColumnUnits,
    widths: &WidthOverrides,
) -> Result<TextBlock> {
    let (reference, others) = match ranked.split_first() {
        Some(split) => split,
        None => return Ok(TextBlock::new()),
    };

    let mut lines = vec!["\nComparison:\n".to_string()];

    let cells = units.cells(reference, &COMPARISON_COLUMNS);
    lines.push(render_row(&COMPARISON_COLUMNS, &cells, widths)?);

    for slowdown in compare(reference, others)? {
        let cells = units.cells(slowdown.scenario, &COMPARISON_COLUMNS);
        let row = render_cells(&COMPARISON_COLUMNS, &cells, widths)?;
        lines.push(format!("{} {}\n", row, slowdown.describe()));
    }

    Ok(lines)
}

fn extended_block(
    ranked: &[&ScenarioResult],
    extended: &[Column],
    units: &ColumnUnits,
    widths: &WidthOverrides,
) -> Result<TextBlock> {
    let columns: Vec<Column> = std::iter::once(Column::Name)
        .chain(extended.iter().copied())
        .collect();

    let mut lines = vec![
        "\nExtended options:\n".to_string(),
        render_header(&columns, widths),
    ];

    for scenario in ranked {
        let cells = units.cells(scenario, &columns);
        lines.push(render_row(&columns, &cells, widths)?);
    }

    Ok(lines)
}

/// The unit chosen for each numeric column of a group.
struct ColumnUnits {
    units: HashMap<Column, &'static Unit>,
}

impl ColumnUnits {
    fn compute<'c>(
        scenarios: &[&ScenarioResult],
        columns: impl IntoIterator<Item = &'c Column>,
        scaling: &Scaling,
    ) -> Self {
        let mut units = HashMap::new();

        for &column in columns {
            let Some(quantity) = quantity(column.kind()) else {
                continue;
            };
            if units.contains_key(&column) {
                continue;
            }
            let values: Vec<f64> = scenarios
                .iter()
                .flat_map(|scenario| column_values(column, &scenario.statistics))
                .collect();
            units.insert(column, scale_units(quantity, &values, scaling));
        }

        Self { units }
    }

    fn unit(&self, column: Column) -> Option<&'static Unit> {
        self.units.get(&column).copied()
    }

    fn cells(&self, scenario: &ScenarioResult, columns: &[Column]) -> Cells {
        columns
            .iter()
            .map(|&column| (column, self.cell(scenario, column)))
            .collect()
    }

    fn cell(&self, scenario: &ScenarioResult, column: Column) -> String {
        let statistics = &scenario.statistics;

        match column {
            Column::Name => scenario.name.clone(),
            Column::Deviation => format_deviation(statistics.std_dev_ratio),
            Column::SampleSize => statistics
                .sample_size
                .map_or_else(|| NOT_AVAILABLE.to_string(), format_integer),
            _ => {
                let values = column_values(column, statistics);
                if values.is_empty() {
                    return missing(column).to_string();
                }
                let unit = self
                    .unit(column)
                    .or_else(|| quantity(column.kind()).map(Quantity::base));
                values
                    .iter()
                    .map(|&value| match unit {
                        Some(unit) => unit.format(value),
                        None => format_number(value),
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
    }
}

fn quantity(kind: ValueKind) -> Option<Quantity> {
    match kind {
        ValueKind::Duration => Some(Quantity::Duration),
        ValueKind::Count => Some(Quantity::Count),
        ValueKind::Label | ValueKind::Deviation | ValueKind::Integer => None,
    }
}

/// Values of a scaled column for one scenario; empty when not measured.
fn column_values(column: Column, statistics: &RunStatistics) -> Vec<f64> {
    match column {
        Column::Ips => vec![statistics.ips],
        Column::Average => vec![statistics.average],
        Column::Median => vec![statistics.median],
        Column::Percentile(p) => statistics.percentile(p).into_iter().collect(),
        Column::Minimum => statistics.minimum.into_iter().collect(),
        Column::Maximum => statistics.maximum.into_iter().collect(),
        Column::Mode => statistics
            .mode
            .as_ref()
            .map(|mode| mode.values().to_vec())
            .unwrap_or_default(),
        Column::Name | Column::Deviation | Column::SampleSize => Vec::new(),
    }
}

fn missing(column: Column) -> &'static str {
    match column {
        Column::Mode => "None",
        _ => NOT_AVAILABLE,
    }
}
