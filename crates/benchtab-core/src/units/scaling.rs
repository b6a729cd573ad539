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

//! Scaling strategies for choosing one unit per collection of values.

use super::{Quantity, Unit};
use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a collection of values picks its display unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scaling {
    /// The coarsest unit that keeps the largest value at or above 1.
    #[default]
    Best,
    /// The unit sized for the largest value.
    Largest,
    /// The unit sized for the smallest non-zero value.
    Smallest,
    /// The base unit, values left unscaled.
    Unscaled,
    /// A unit pinned by name, symbol or alias.
    Fixed(String),
}

impl Scaling {
    /// Returns the strategy as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Scaling::Best => "best",
            Scaling::Largest => "largest",
            Scaling::Smallest => "smallest",
            Scaling::Unscaled => "none",
            Scaling::Fixed(unit) => unit,
        }
    }

    /// Checks that a pinned unit exists in at least one unit table.
    pub fn validate(&self) -> Result<()> {
        match self {
            Scaling::Fixed(unit)
                if Quantity::ALL
                    .iter()
                    .all(|quantity| quantity.unit_named(unit).is_none()) =>
            {
                Err(ReportError::configuration(unit.as_str(), "unknown unit"))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for Scaling {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches(':');
        Ok(match name.to_ascii_lowercase().as_str() {
            "best" => Scaling::Best,
            "largest" => Scaling::Largest,
            "smallest" => Scaling::Smallest,
            "none" => Scaling::Unscaled,
            _ => Scaling::Fixed(name.to_string()),
        })
    }
}

impl From<String> for Scaling {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(scaling) => scaling,
            Err(never) => match never {},
        }
    }
}

impl From<Scaling> for String {
    fn from(scaling: Scaling) -> Self {
        scaling.as_str().to_string()
    }
}

impl fmt::Display for Scaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the unit a whole collection of values is rendered in.
///
/// Zeros and non-finite values never drive the choice; a collection without
/// any other value falls back to the base unit.
pub fn scale_units(quantity: Quantity, values: &[f64], scaling: &Scaling) -> &'static Unit {
    let magnitudes = values
        .iter()
        .map(|value| value.abs())
        .filter(|value| value.is_finite() && *value > 0.0);

    match scaling {
        Scaling::Unscaled => quantity.base(),
        Scaling::Fixed(name) => match quantity.unit_named(name) {
            Some(unit) => unit,
            None => scale_units(quantity, values, &Scaling::Best),
        },
        Scaling::Best | Scaling::Largest => magnitudes
            .reduce(f64::max)
            .map_or_else(|| quantity.base(), |max| quantity.best_unit(max)),
        Scaling::Smallest => magnitudes
            .reduce(f64::min)
            .map_or_else(|| quantity.base(), |min| quantity.best_unit(min)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_shares_one_unit() {
        let values = [200.0, 195.5];
        let unit = scale_units(Quantity::Duration, &values, &Scaling::Best);
        assert_eq!(unit.symbol, "μs");
        assert_eq!(unit.format(200.0), "200 μs");
        assert_eq!(unit.format(195.5), "195.5 μs");
    }

    #[test]
    fn test_best_small_and_large_values() {
        let small = scale_units(Quantity::Duration, &[0.0125], &Scaling::Best);
        assert_eq!(small.format(0.0125), "0.0125 μs");

        let large = scale_units(Quantity::Duration, &[11_000.0], &Scaling::Best);
        assert_eq!(large.format(11_000.0), "11 ms");
    }

    #[test]
    fn test_best_follows_largest_value() {
        let unit = scale_units(Quantity::Duration, &[500.0, 1_500.0, 20.0], &Scaling::Best);
        assert_eq!(unit.symbol, "ms");
        assert_eq!(unit.format(500.0), "0.5 ms");
    }

    #[test]
    fn test_largest_and_smallest() {
        let values = [1_500.0, 2_500_000.0];
        assert_eq!(
            scale_units(Quantity::Duration, &values, &Scaling::Largest).symbol,
            "s"
        );
        assert_eq!(
            scale_units(Quantity::Duration, &values, &Scaling::Smallest).symbol,
            "ms"
        );
    }

    #[test]
    fn test_unscaled_uses_base_unit() {
        let unit = scale_units(Quantity::Count, &[5_000_000.0], &Scaling::Unscaled);
        assert_eq!(unit.format(5_000_000.0), "5000000");
    }

    #[test]
    fn test_empty_and_zero_collections_use_base_unit() {
        for scaling in [Scaling::Best, Scaling::Largest, Scaling::Smallest] {
            assert_eq!(scale_units(Quantity::Duration, &[], &scaling).symbol, "μs");
            assert_eq!(
                scale_units(Quantity::Duration, &[0.0, 0.0], &scaling).symbol,
                "μs"
            );
        }
    }

    #[test]
    fn test_smallest_ignores_zero() {
        let unit = scale_units(Quantity::Count, &[0.0, 4_000.0, 9_000_000.0], &Scaling::Smallest);
        assert_eq!(unit.symbol, "K");
    }

    #[test]
    fn test_fixed_unit() {
        let pinned = Scaling::Fixed("ms".to_string());
        assert_eq!(scale_units(Quantity::Duration, &[12.0], &pinned).format(12.0), "0.012 ms");
        // Counts have no millisecond unit and fall back to best fit.
        assert_eq!(scale_units(Quantity::Count, &[12_000.0], &pinned).symbol, "K");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("best".parse::<Scaling>().unwrap(), Scaling::Best);
        assert_eq!(":largest".parse::<Scaling>().unwrap(), Scaling::Largest);
        assert_eq!("NONE".parse::<Scaling>().unwrap(), Scaling::Unscaled);
        assert_eq!(
            "second".parse::<Scaling>().unwrap(),
            Scaling::Fixed("second".to_string())
        );
        assert_eq!(Scaling::Unscaled.to_string(), "none");
        assert_eq!(Scaling::Fixed("ms".to_string()).to_string(), "ms");
    }

    #[test]
    fn test_validate() {
        assert!(Scaling::Best.validate().is_ok());
        assert!(Scaling::Fixed("K".to_string()).validate().is_ok());

        let err = Scaling::Fixed("parsec".to_string()).validate().unwrap_err();
        assert!(err.to_string().contains("parsec"));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Scaling::Smallest).unwrap();
        assert_eq!(json, "\"smallest\"");

        let scaling: Scaling = serde_json::from_str("\"minute\"").unwrap();
        assert_eq!(scaling, Scaling::Fixed("minute".to_string()));
    }
}
