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

//! Unit tables and best-fit unit scaling.
//!
//! Each measured quantity owns a fixed, ascending table of units. A column of
//! values is rendered in exactly one unit, chosen from the whole column by a
//! [`Scaling`] strategy, so numbers in a column can be compared at a glance.
//!
//! # Modules
//!
//! - `scaling`: Scaling strategies and per-collection unit selection
//! - `format`: Number rendering without exponential notation

mod format;
mod scaling;

pub use format::{format_deviation, format_integer, format_number, NOT_AVAILABLE};
pub use scaling::{scale_units, Scaling};

/// A display unit of a quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Long name, e.g. `millisecond`.
    pub name: &'static str,
    /// Symbol appended to scaled values, e.g. `ms`. Empty for plain counts.
    pub symbol: &'static str,
    /// How many base units one of this unit represents.
    pub magnitude: f64,
    /// Additional spellings accepted when pinning this unit by name.
    pub aliases: &'static [&'static str],
}

impl Unit {
    /// Converts a value in base units into this unit.
    pub fn scale(&self, value: f64) -> f64 {
        value / self.magnitude
    }

    /// Scales a value into this unit and renders it with the unit symbol.
    ///
    /// Non-finite values render as the bare placeholder, without a symbol.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format_number(value);
        }
        let number = format_number(self.scale(value));
        if self.symbol.is_empty() {
            number
        } else {
            format!("{} {}", number, self.symbol)
        }
    }

    /// Returns true if `name` refers to this unit.
    ///
    /// Long names are matched case-insensitively, symbols exactly.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || (!self.symbol.is_empty() && self.symbol == name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

/// Durations, with microseconds as the base unit.
const DURATION_UNITS: [Unit; 5] = [
    Unit {
        name: "microsecond",
        symbol: "μs",
        magnitude: 1.0,
        aliases: &["us", "microseconds"],
    },
    Unit {
        name: "millisecond",
        symbol: "ms",
        magnitude: 1_000.0,
        aliases: &["milliseconds"],
    },
    Unit {
        name: "second",
        symbol: "s",
        magnitude: 1_000_000.0,
        aliases: &["seconds"],
    },
    Unit {
        name: "minute",
        symbol: "min",
        magnitude: 60_000_000.0,
        aliases: &["minutes"],
    },
    Unit {
        name: "hour",
        symbol: "h",
        magnitude: 3_600_000_000.0,
        aliases: &["hours"],
    },
];

/// Plain counts such as iterations per second.
const COUNT_UNITS: [Unit; 4] = [
    Unit {
        name: "one",
        symbol: "",
        magnitude: 1.0,
        aliases: &[],
    },
    Unit {
        name: "thousand",
        symbol: "K",
        magnitude: 1_000.0,
        aliases: &[],
    },
    Unit {
        name: "million",
        symbol: "M",
        magnitude: 1_000_000.0,
        aliases: &[],
    },
    Unit {
        name: "billion",
        symbol: "G",
        magnitude: 1_000_000_000.0,
        aliases: &[],
    },
];

/// A kind of measured quantity with its own unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Run times.
    Duration,
    /// Throughput and other counts.
    Count,
}

impl Quantity {
    /// All quantities with unit tables.
    pub const ALL: [Quantity; 2] = [Quantity::Duration, Quantity::Count];

    /// Returns the unit table in ascending magnitude.
    pub fn units(self) -> &'static [Unit] {
        match self {
            Quantity::Duration => &DURATION_UNITS,
            Quantity::Count => &COUNT_UNITS,
        }
    }

    /// Returns the smallest, unscaled unit.
    pub fn base(self) -> &'static Unit {
        &self.units()[0]
    }

    /// Returns the largest unit that keeps `value` at or above 1.
    ///
    /// Values smaller than one base unit, and zero, stay in the base unit.
    pub fn best_unit(self, value: f64) -> &'static Unit {
        let magnitude = value.abs();
        self.units()
            .iter()
            .rev()
            .find(|unit| magnitude >= unit.magnitude)
            .unwrap_or_else(|| self.base())
    }

    /// Looks a unit up by long name, symbol or alias.
    pub fn unit_named(self, name: &str) -> Option<&'static Unit> {
        self.units().iter().find(|unit| unit.matches(name))
    }
}
