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

//! End-to-end report formatting tests

use benchtab_core::{
    format, render, Column, Mode, ReportConfig, ReportError, RunStatistics, ScenarioResult,
    Scaling,
};

// ===== Test Helpers =====

fn first_and_second() -> Vec<ScenarioResult> {
    vec![
        ScenarioResult::new(
            "Second",
            RunStatistics::new(200.0, 5_000.0)
                .with_std_dev_ratio(0.05)
                .with_percentile(99, 260.0),
        ),
        ScenarioResult::new(
            "First",
            RunStatistics::new(100.0, 10_000.0)
                .with_std_dev_ratio(0.1)
                .with_percentile(99, 150.0),
        ),
    ]
}

/// Name column width for a set of names, as the report computes it.
fn name_width(names: &[&str]) -> usize {
    names
        .iter()
        .map(|n| n.chars().count())
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap()
        + 1
}

// ===== End-to-End Tests =====

#[test]
fn test_first_and_second_report() {
    let blocks = format(&first_and_second(), &ReportConfig::default()).unwrap();
    assert_eq!(blocks.len(), 1);
    let lines = &blocks[0];

    let w = name_width(&["First", "Second"]);
    assert_eq!(w, 7);

    let expected = vec![
        format!(
            "\n{:<w$}{:>13}{:>15}{:>11}{:>15}{:>15}\n",
            "Name", "ips", "average", "deviation", "median", "99th %",
            w = w
        ),
        format!(
            "{:<w$}{:>13}{:>15}{:>11}{:>15}{:>15}\n",
            "First", "10 K", "100 μs", "±10.00%", "100 μs", "150 μs",
            w = w
        ),
        format!(
            "{:<w$}{:>13}{:>15}{:>11}{:>15}{:>15}\n",
            "Second", "5 K", "200 μs", "±5.00%", "200 μs", "260 μs",
            w = w
        ),
        "\nComparison:\n".to_string(),
        format!("{:<w$}{:>13}\n", "First", "10 K", w = w),
        format!("{:<w$}{:>13} - 2.00x slower\n", "Second", "5 K", w = w),
    ];

    assert_eq!(lines, &expected);
}

#[test]
fn test_reference_line_is_fastest() {
    let blocks = format(&first_and_second(), &ReportConfig::default()).unwrap();
    let lines = &blocks[0];

    let comparison = lines
        .iter()
        .position(|line| line == "\nComparison:\n")
        .expect("comparison banner");
    let reference = &lines[comparison + 1];
    assert!(reference.starts_with("First "));
    assert!(reference.contains("10 K"));
    assert!(!reference.contains("slower"));

    let slower = &lines[comparison + 2];
    assert!(slower.starts_with("Second "));
    assert!(slower.ends_with("- 2.00x slower\n"));
}

#[test]
fn test_groups_follow_first_appearance() {
    let results = vec![
        ScenarioResult::new("map", RunStatistics::new(10.0, 100_000.0)).with_input("Small"),
        ScenarioResult::new("map", RunStatistics::new(1_000.0, 1_000.0)).with_input("Big"),
        ScenarioResult::new("flat_map", RunStatistics::new(5.0, 200_000.0)).with_input("Small"),
        ScenarioResult::new("flat_map", RunStatistics::new(2_000.0, 500.0)).with_input("Big"),
    ];

    let blocks = format(&results, &ReportConfig::default()).unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0][0], "\n##### With input Small #####\n");
    assert_eq!(blocks[1][0], "\n##### With input Big #####\n");

    // Small: flat_map is faster, Big: map is faster
    assert!(blocks[0][2].starts_with("flat_map"));
    assert!(blocks[1][2].starts_with("map"));

    // Big averages scale to milliseconds, Small ones stay in microseconds
    assert!(blocks[1][2].contains("1 ms"));
    assert!(blocks[0][2].contains("5 μs"));
}

#[test]
fn test_name_width_shared_across_blocks() {
    let results = vec![
        ScenarioResult::new("a", RunStatistics::new(1.0, 1_000_000.0)),
        ScenarioResult::new("a_much_longer_name", RunStatistics::new(2.0, 500_000.0)),
    ];
    let config = ReportConfig::default().with_extended_columns(["minimum"]);
    let blocks = format(&results, &config).unwrap();
    let lines = &blocks[0];

    let w = name_width(&["a", "a_much_longer_name"]);
    let header = &lines[0];
    assert_eq!(&header[1..1 + w], format!("{:<w$}", "Name", w = w));

    for line in lines.iter().filter(|line| line.starts_with("a ")) {
        assert_eq!(&line[..w], format!("{:<w$}", "a", w = w));
    }
    for line in lines.iter().filter(|line| line.starts_with("a_much")) {
        assert_eq!(line.as_bytes()[w - 1], b' ');
    }
}

#[test]
fn test_extended_block() {
    let results = vec![
        ScenarioResult::new(
            "slow",
            RunStatistics::new(2_000.0, 500.0)
                .with_extrema(1_500.0, 4_000.0)
                .with_sample_size(250)
                .with_mode(Mode::Multiple(vec![1_900.0, 2_100.0])),
        ),
        ScenarioResult::new(
            "fast",
            RunStatistics::new(100.0, 10_000.0)
                .with_extrema(90.0, 400.0)
                .with_sample_size(5_000)
                .with_mode(Mode::Single(99.0)),
        ),
    ];
    let config = ReportConfig::default()
        .with_comparison(false)
        .with_extended_columns([":minimum", ":maximum", ":sample_size", ":mode"]);

    let blocks = format(&results, &config).unwrap();
    let lines = &blocks[0];
    let w = name_width(&["slow", "fast"]);

    let banner = lines
        .iter()
        .position(|line| line == "\nExtended options:\n")
        .expect("extended banner");

    assert_eq!(
        lines[banner + 1],
        format!(
            "{:<w$}{:>15}{:>15}{:>15}{:>25}\n",
            "Name", "minimum", "maximum", "sample size", "mode",
            w = w
        )
    );
    // Same ranked order as the main table; minimum scales to ms because of 1500 μs
    assert_eq!(
        lines[banner + 2],
        format!(
            "{:<w$}{:>15}{:>15}{:>15}{:>25}\n",
            "fast", "0.09 ms", "0.4 ms", "5000", "0.099 ms",
            w = w
        )
    );
    assert_eq!(
        lines[banner + 3],
        format!(
            "{:<w$}{:>15}{:>15}{:>15}{:>25}\n",
            "slow", "1.5 ms", "4 ms", "250", "1.9 ms, 2.1 ms",
            w = w
        )
    );
}

#[test]
fn test_unknown_extended_column() {
    let config = ReportConfig::default().with_extended_columns([":bogus"]);
    let result = format(&first_and_second(), &config);

    match result {
        Err(ReportError::Configuration { identifier, .. }) => assert_eq!(identifier, "bogus"),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_unscaled_report() {
    let config = ReportConfig::default().with_unit_scaling(Scaling::Unscaled);
    let report = render(&format(&first_and_second(), &config).unwrap());

    assert!(report.contains("10000"));
    assert!(report.contains("100 μs"));
    assert!(!report.contains(" K"));
}

#[test]
fn test_pinned_unit() {
    let config = ReportConfig::default().with_unit_scaling("ms".parse().unwrap());
    let report = render(&format(&first_and_second(), &config).unwrap());

    assert!(report.contains("0.1 ms"));
    assert!(report.contains("0.2 ms"));
    // Throughput has no millisecond unit and keeps its best fit
    assert!(report.contains("10 K"));
}

#[test]
fn test_width_override() {
    let config = ReportConfig::default().with_column_width("ips", 20);
    let blocks = format(&first_and_second(), &config).unwrap();
    let w = name_width(&["First", "Second"]);

    assert_eq!(
        blocks[0][1],
        format!(
            "{:<w$}{:>20}{:>15}{:>11}{:>15}{:>15}\n",
            "First", "10 K", "100 μs", "±10.00%", "100 μs", "150 μs",
            w = w
        )
    );
}

#[test]
fn test_missing_percentile_renders_placeholder() {
    let results = vec![ScenarioResult::new("only", RunStatistics::new(3.0, 333_333.0))];
    let blocks = format(&results, &ReportConfig::default()).unwrap();
    assert!(blocks[0][1].trim_end().ends_with("N/A"));
}

#[test]
fn test_default_columns_order() {
    let headers: Vec<String> = benchtab_core::DEFAULT_COLUMNS
        .iter()
        .map(Column::header)
        .collect();
    assert_eq!(
        headers,
        vec!["Name", "ips", "average", "deviation", "median", "99th %"]
    );
}
