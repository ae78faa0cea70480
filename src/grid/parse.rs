//! Parsing of the text input format.
//!
//! ```text
//! 3 5 1 6
//! TTTTT
//! TMMMT
//! TTTTT
//! ```
//!
//! The header holds `rows columns L H`; exactly `rows` lines of `columns`
//! `T`/`M` characters follow. Trailing blank lines are ignored.

use std::str::FromStr;

use super::error::GridError;
use super::grid::Grid;
use super::limits::Limits;

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(|line| line.trim_end());
        let header = lines.next().ok_or(GridError::MissingHeader)?;
        if header.trim().is_empty() {
            return Err(GridError::MissingHeader);
        }

        let values = header
            .split_whitespace()
            .map(|v| v.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GridError::InvalidHeader(header.to_string()))?;
        let [rows, columns, min_each, max_cells] = values[..] else {
            return Err(GridError::InvalidHeader(header.to_string()));
        };
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyGrid { rows, columns });
        }
        let limits = Limits::new(min_each, max_cells)?;

        let body: Vec<&str> = lines.collect();
        let found = body
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |last| last + 1);
        if found != rows {
            return Err(GridError::RowCount {
                expected: rows,
                found,
            });
        }

        let body = &body[..rows];
        for (row, line) in body.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(GridError::RowLength {
                    row,
                    expected: columns,
                    found,
                });
            }
        }
        Grid::from_rows(limits, body)
    }
}
