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

//! Number rendering for report cells.

/// Placeholder for values that cannot be shown.
pub const NOT_AVAILABLE: &str = "N/A";

/// Renders a number for display.
///
/// Integral values print without decimals, values below 1 with four decimals
/// and everything else with two; trailing zeros are then dropped. Never uses
/// exponential notation. `NaN` and infinities render as `N/A`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let precision = if value.fract() == 0.0 {
        0
    } else if value.abs() < 1.0 {
        4
    } else {
        2
    };

    let mut rendered = format!("{:.*}", precision, value);
    if rendered.contains('.') {
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(trimmed);
    }
    if rendered == "-0" {
        rendered.remove(0);
    }
    rendered
}

/// Renders a relative standard deviation as `±NN.NN%`.
pub fn format_deviation(ratio: f64) -> String {
    if !ratio.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("±{:.2}%", ratio * 100.0)
}

/// Renders a count that is never scaled, such as a sample size.
pub fn format_integer(value: u64) -> String {
    value.to_string()
}
