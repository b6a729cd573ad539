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

//! Report configuration.
//!
//! A [`ReportConfig`] holds column identifiers as plain strings so it can be
//! loaded from configuration files as-is; [`ReportConfig::resolve`] turns it
//! into typed columns and fails on the first unknown identifier, before any
//! output is produced.
//!
//! # Example
//!
//! ```
//! use benchtab_core::{ReportConfig, Scaling};
//!
//! let config = ReportConfig::default()
//!     .with_unit_scaling(Scaling::Smallest)
//!     .with_extended_columns(["minimum", "maximum", "sample_size"]);
//!
//! assert!(config.resolve().is_ok());
//! ```

use crate::error::{ReportError, Result};
use crate::layout::{Column, WidthOverrides};
use crate::units::Scaling;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Options for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Emit the comparison block for groups with more than one scenario.
    pub comparison: bool,
    /// How each numeric column picks its unit.
    pub unit_scaling: Scaling,
    /// Columns of the extended statistics block, in display order.
    pub extended_columns: Vec<String>,
    /// Width overrides for non-name columns, keyed by column identifier.
    pub column_widths: BTreeMap<String, usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            comparison: true,
            unit_scaling: Scaling::Best,
            extended_columns: Vec::new(),
            column_widths: BTreeMap::new(),
        }
    }
}

impl ReportConfig {
    /// Enables or disables the comparison block.
    pub fn with_comparison(mut self, comparison: bool) -> Self {
        self.comparison = comparison;
        self
    }

    /// Sets the unit scaling strategy.
    pub fn with_unit_scaling(mut self, scaling: Scaling) -> Self {
        self.unit_scaling = scaling;
        self
    }

    /// Replaces the extended columns.
    pub fn with_extended_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extended_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the width of a column.
    pub fn with_column_width(mut self, column: impl Into<String>, width: usize) -> Self {
        self.column_widths.insert(column.into(), width);
        self
    }

    /// Validates the configuration and resolves all identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] naming the first identifier
    /// that is not a supported column, a pinned unit no table defines, or a
    /// width override that cannot be applied.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.unit_scaling.validate()?;

        let mut extended = Vec::with_capacity(self.extended_columns.len());
        for identifier in &self.extended_columns {
            match Column::parse(identifier)? {
                Column::Name => {
                    return Err(ReportError::configuration(
                        identifier.as_str(),
                        "the name column is always shown",
                    ))
                }
                column => extended.push(column),
            }
        }

        let mut widths = WidthOverrides::new();
        for (identifier, &width) in &self.column_widths {
            match Column::parse(identifier)? {
                Column::Name => {
                    return Err(ReportError::configuration(
                        identifier.as_str(),
                        "the name column width is computed from scenario names",
                    ))
                }
                _ if width == 0 => {
                    return Err(ReportError::configuration(
                        identifier.as_str(),
                        "width must be positive",
                    ))
                }
                column => {
                    widths.insert(column, width);
                }
            }
        }

        debug!(
            "Resolved report configuration: comparison={}, scaling={}, {} extended columns, {} width overrides",
            self.comparison,
            self.unit_scaling,
            extended.len(),
            widths.len()
        );

        Ok(ResolvedConfig {
            comparison: self.comparison,
            scaling: self.unit_scaling.clone(),
            extended,
            widths,
        })
    }
}

/// A validated configuration with typed columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Emit the comparison block.
    pub comparison: bool,
    /// Unit scaling strategy.
    pub scaling: Scaling,
    /// Extended statistics columns, without the name column.
    pub extended: Vec<Column>,
    /// Width overrides for non-name columns.
    pub widths: WidthOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert!(config.comparison);
        assert_eq!(config.unit_scaling, Scaling::Best);
        assert!(config.extended_columns.is_empty());

        let resolved = config.resolve().unwrap();
        assert!(resolved.extended.is_empty());
        assert!(resolved.widths.is_empty());
    }

    #[test]
    fn test_resolve_extended_columns() {
        let config = ReportConfig::default().with_extended_columns([
            ":minimum",
            "maximum",
            "sample_size",
            "mode",
            "p50",
        ]);

        let resolved = config.resolve().unwrap();
        assert_eq!(
            resolved.extended,
            vec![
                Column::Minimum,
                Column::Maximum,
                Column::SampleSize,
                Column::Mode,
                Column::Percentile(50)
            ]
        );
    }

    #[test]
    fn test_resolve_unknown_extended_column() {
        let config = ReportConfig::default().with_extended_columns([":minimum", ":bogus"]);
        let err = config.resolve().unwrap_err();
        assert_eq!(err, ReportError::unknown_column("bogus"));
    }

    #[test]
    fn test_resolve_rejects_name_column() {
        let config = ReportConfig::default().with_extended_columns(["name"]);
        assert!(config.resolve().unwrap_err().is_configuration());

        let config = ReportConfig::default().with_column_width("name", 30);
        assert!(config.resolve().unwrap_err().is_configuration());
    }

    #[test]
    fn test_resolve_width_overrides() {
        let config = ReportConfig::default().with_column_width("ips", 20);
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.widths.get(&Column::Ips), Some(&20));

        let config = ReportConfig::default().with_column_width("ips", 0);
        assert!(config.resolve().is_err());

        let config = ReportConfig::default().with_column_width("speed", 10);
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn test_resolve_unknown_unit() {
        let config =
            ReportConfig::default().with_unit_scaling(Scaling::Fixed("fortnight".to_string()));
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("fortnight"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ReportConfig =
            serde_json::from_str(r#"{"unit_scaling": "none", "extended_columns": ["mode"]}"#)
                .unwrap();
        assert!(config.comparison);
        assert_eq!(config.unit_scaling, Scaling::Unscaled);
        assert_eq!(config.extended_columns, vec!["mode".to_string()]);
    }
}
