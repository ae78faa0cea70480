//! Reading the submission format back into rectangles.
//!
//! ```text
//! 3
//! 0 0 2 1
//! 0 2 2 2
//! 0 3 2 4
//! ```
//!
//! The first line holds the slice count; each following line holds
//! `top left bottom right`, all inclusive.

use super::errors::CoverError;
use crate::grid::Bounds;

/// Parses a submission into slice bounds, in file order.
///
/// Line numbers in errors are 1-based.
pub fn parse(text: &str) -> Result<Vec<Bounds>, CoverError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, header) = lines.next().ok_or(CoverError::InvalidSubmission {
        line: 1,
        reason: "missing slice count".to_string(),
    })?;
    let count = header
        .parse::<usize>()
        .map_err(|_| invalid(line, format!("expected a slice count, got '{header}'")))?;

    let mut bounds = Vec::new();
    for (line, text) in lines {
        if bounds.len() == count {
            return Err(invalid(line, format!("more than {count} slices listed")));
        }
        let coords = text
            .split_whitespace()
            .map(|v| v.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid(line, format!("expected four coordinates, got '{text}'")))?;
        let [top, left, bottom, right] = coords[..] else {
            return Err(invalid(
                line,
                format!("expected four coordinates, got {}", coords.len()),
            ));
        };
        let rect = Bounds::try_from_coords(top, left, bottom, right)
            .ok_or_else(|| invalid(line, "corners are inverted".to_string()))?;
        bounds.push(rect);
    }

    if bounds.len() != count {
        return Err(invalid(
            line + bounds.len(),
            format!("expected {count} slices, found {}", bounds.len()),
        ));
    }
    Ok(bounds)
}

fn invalid(line: usize, reason: String) -> CoverError {
    CoverError::InvalidSubmission { line, reason }
}
