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

//! Scenario results handed over by the benchmarking harness.
//!
//! The formatter only reads these values. Durations are expressed in
//! microseconds and throughput in iterations per second; the harness is
//! responsible for keeping `ips` consistent with `average`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One benchmark function measured under one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Display label, expected to be unique within its input group.
    pub name: String,
    /// Input the scenario ran with. `None` means the suite has no inputs.
    #[serde(default)]
    pub input: Option<String>,
    /// Computed statistics for this scenario.
    pub statistics: RunStatistics,
}

impl ScenarioResult {
    /// Creates a scenario without an input dimension.
    pub fn new(name: impl Into<String>, statistics: RunStatistics) -> Self {
        Self {
            name: name.into(),
            input: None,
            statistics,
        }
    }

    /// Sets the input this scenario belongs to.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Returns the input name, if any.
    pub fn input_name(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

/// Statistics computed for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Mean run time in microseconds.
    pub average: f64,
    /// Median run time in microseconds.
    pub median: f64,
    /// Iterations per second.
    pub ips: f64,
    /// Standard deviation relative to the average (0.05 = 5%).
    pub std_dev_ratio: f64,
    /// Run time at each computed percentile, keyed by percentile.
    #[serde(default)]
    pub percentiles: BTreeMap<u32, f64>,
    /// Fastest observed run time.
    #[serde(default)]
    pub minimum: Option<f64>,
    /// Slowest observed run time.
    #[serde(default)]
    pub maximum: Option<f64>,
    /// Number of samples the statistics were computed from.
    #[serde(default)]
    pub sample_size: Option<u64>,
    /// Most frequent run time(s).
    #[serde(default)]
    pub mode: Option<Mode>,
}

impl RunStatistics {
    /// Creates statistics from an average and the matching throughput.
    ///
    /// The median defaults to the average and the deviation to zero.
    pub fn new(average: f64, ips: f64) -> Self {
        Self {
            average,
            median: average,
            ips,
            std_dev_ratio: 0.0,
            percentiles: BTreeMap::new(),
            minimum: None,
            maximum: None,
            sample_size: None,
            mode: None,
        }
    }

    /// Sets the median.
    pub fn with_median(mut self, median: f64) -> Self {
        self.median = median;
        self
    }

    /// Sets the relative standard deviation.
    pub fn with_std_dev_ratio(mut self, ratio: f64) -> Self {
        self.std_dev_ratio = ratio;
        self
    }

    /// Records the run time at a percentile.
    pub fn with_percentile(mut self, percentile: u32, value: f64) -> Self {
        self.percentiles.insert(percentile, value);
        self
    }

    /// Sets the observed extrema.
    pub fn with_extrema(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// Sets the sample size.
    pub fn with_sample_size(mut self, sample_size: u64) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    /// Sets the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Returns the run time at a percentile, if it was computed.
    pub fn percentile(&self, percentile: u32) -> Option<f64> {
        self.percentiles.get(&percentile).copied()
    }
}

/// Most frequent run time(s) of a scenario.
///
/// Samples can have several equally frequent values, in which case the
/// harness reports them all in the order it found them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mode {
    /// A single most frequent value.
    Single(f64),
    /// Several equally frequent values.
    Multiple(Vec<f64>),
}

impl Mode {
    /// Returns the mode values in reported order.
    pub fn values(&self) -> &[f64] {
        match self {
            Mode::Single(value) => std::slice::from_ref(value),
            Mode::Multiple(values) => values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_builder() {
        let stats = RunStatistics::new(100.0, 10_000.0)
            .with_std_dev_ratio(0.05)
            .with_percentile(99, 150.0)
            .with_extrema(90.0, 160.0)
            .with_sample_size(1_000);

        assert_eq!(stats.median, 100.0);
        assert_eq!(stats.percentile(99), Some(150.0));
        assert_eq!(stats.percentile(50), None);
        assert_eq!(stats.minimum, Some(90.0));
        assert_eq!(stats.sample_size, Some(1_000));
    }

    #[test]
    fn test_mode_values() {
        assert_eq!(Mode::Single(5.0).values(), &[5.0]);
        assert_eq!(Mode::Multiple(vec![3.0, 1.0]).values(), &[3.0, 1.0]);
    }

    #[test]
    fn test_deserialize_scenario() {
        let json = r#"{
            "name": "flat_map",
            "input": "Small",
            "statistics": {
                "average": 100.0,
                "median": 98.0,
                "ips": 10000.0,
                "std_dev_ratio": 0.1,
                "percentiles": {"99": 140.0},
                "mode": [97.0, 98.0]
            }
        }"#;

        let scenario: ScenarioResult = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.input_name(), Some("Small"));
        assert_eq!(scenario.statistics.percentile(99), Some(140.0));
        assert_eq!(
            scenario.statistics.mode,
            Some(Mode::Multiple(vec![97.0, 98.0]))
        );
        assert_eq!(scenario.statistics.minimum, None);
    }

    #[test]
    fn test_deserialize_without_input() {
        let json = r#"{
            "name": "map",
            "statistics": {"average": 1.0, "median": 1.0, "ips": 1000000.0, "std_dev_ratio": 0.0, "mode": 1.0}
        }"#;

        let scenario: ScenarioResult = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.input_name(), None);
        assert_eq!(scenario.statistics.mode, Some(Mode::Single(1.0)));
    }
}
