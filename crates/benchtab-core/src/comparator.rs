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

//! Scenario ranking and slowdown comparison.
//!
//! Scenarios are ranked fastest first by average run time. The first ranked
//! scenario is the reference every other scenario is compared against.

use crate::error::{ReportError, Result};
use crate::scenario::ScenarioResult;

/// Relative slowdown of one scenario against the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slowdown<'a> {
    /// The slower scenario.
    pub scenario: &'a ScenarioResult,
    /// Reference throughput divided by this scenario's throughput.
    pub ratio: f64,
}

impl Slowdown<'_> {
    /// Renders the ratio as `- 2.00x slower`.
    pub fn describe(&self) -> String {
        format!("- {:.2}x slower", self.ratio)
    }
}

/// Orders scenarios by ascending average run time.
///
/// The sort is stable: scenarios with equal averages keep their input order.
pub fn rank<'a, I>(scenarios: I) -> Vec<&'a ScenarioResult>
where
    I: IntoIterator<Item = &'a ScenarioResult>,
{
    let mut ranked: Vec<&ScenarioResult> = scenarios.into_iter().collect();
    ranked.sort_by(|a, b| a.statistics.average.total_cmp(&b.statistics.average));
    ranked
}

/// Computes how many times slower `other` is than `reference`.
///
/// # Errors
///
/// Returns [`ReportError::Division`] if either throughput is zero, negative
/// or not finite, or if the ratio itself overflows.
pub fn slowdown(reference: &ScenarioResult, other: &ScenarioResult) -> Result<f64> {
    for scenario in [other, reference] {
        if !is_usable_throughput(scenario.statistics.ips) {
            return Err(division(scenario));
        }
    }

    let ratio = reference.statistics.ips / other.statistics.ips;
    if !ratio.is_finite() {
        return Err(division(other));
    }
    Ok(ratio)
}

fn is_usable_throughput(ips: f64) -> bool {
    ips.is_finite() && ips > 0.0
}

fn division(scenario: &ScenarioResult) -> ReportError {
    ReportError::Division {
        scenario: scenario.name.clone(),
    }
}

/// Compares every scenario in `others` against `reference`, keeping order.
///
/// # Errors
///
/// Returns [`ReportError::Division`] for the first scenario whose ratio
/// cannot be computed.
pub fn compare<'a>(
    reference: &ScenarioResult,
    others: &[&'a ScenarioResult],
) -> Result<Vec<Slowdown<'a>>> {
    others
        .iter()
        .map(|&scenario| {
            Ok(Slowdown {
                scenario,
                ratio: slowdown(reference, scenario)?,
            })
        })
        .collect()
}
