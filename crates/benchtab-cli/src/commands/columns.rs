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

//! Column listing command.

use crate::error::CliError;
use benchtab_core::Column;
use std::io::{self, Write};

/// Print every supported column with its identifier, header and width.
pub fn columns() -> Result<(), CliError> {
    write_listing(&mut io::stdout().lock())
}

fn write_listing<W: Write>(out: &mut W) -> Result<(), CliError> {
    out.write_all(column_listing().as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}

fn column_listing() -> String {
    let mut out = format!("{:<14}{:<16}{:>6}\n", "IDENTIFIER", "HEADER", "WIDTH");
    for column in Column::CATALOGUE {
        let width = match column {
            Column::Name => "auto".to_string(),
            other => other.default_width().to_string(),
        };
        out.push_str(&format!(
            "{:<14}{:<16}{:>6}\n",
            column.identifier(),
            column.header(),
            width
        ));
    }
    out.push_str("\nPercentile columns accept any of p1 through p100 (e.g. p50, p99).\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_covers_catalogue() {
        let listing = column_listing();
        for column in Column::CATALOGUE {
            assert!(listing.contains(&column.identifier()));
        }
        assert!(listing.contains("auto"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_stdout_is_an_error() {
        let err = write_listing(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_write_listing() {
        let mut buffer = Vec::new();
        write_listing(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), column_listing());
    }
}
