//! Windower - centered display slice of a context-padded row.
//!
//! Cells outside the window only feed future generations and are never drawn.

use std::ops::Range;

use crate::engine::Row;
use crate::error::{AutomatonError, Result};
use crate::types::Bit;

/// Half-open range of the middle `display_width` cells of a row of `row_len`.
pub fn display_bounds(row_len: usize, display_width: usize) -> Result<Range<usize>> {
    if display_width > row_len {
        return Err(AutomatonError::invalid_argument(format!(
            "display width {} exceeds row length {}",
            display_width, row_len
        )));
    }
    if (row_len - display_width) % 2 != 0 {
        return Err(AutomatonError::invalid_argument(format!(
            "row length {} and display width {} cannot be centered",
            row_len, display_width
        )));
    }

    let start = (row_len - display_width) / 2;
    Ok(start..start + display_width)
}

impl Row {
    /// Borrow the centered `display_width` cells of this row.
    pub fn window(&self, display_width: usize) -> Result<&[Bit]> {
        let bounds = display_bounds(self.len(), display_width)?;
        Ok(&self.cells()[bounds])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::size_info;

    #[test]
    fn bounds_are_centered_and_exact() {
        for len in (1..50usize).step_by(2) {
            for w in (1..=len).step_by(2) {
                let r = display_bounds(len, w).unwrap();
                assert_eq!(r.len(), w);
                assert!(r.end <= len);
                assert_eq!(r.start, len - r.end);
            }
        }
    }

    #[test]
    fn bounds_reject_wide_or_uncenterable_windows() {
        assert!(matches!(
            display_bounds(5, 7),
            Err(AutomatonError::InvalidArgument(_))
        ));
        assert!(matches!(
            display_bounds(9, 4),
            Err(AutomatonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn full_width_window_is_whole_row() {
        assert_eq!(display_bounds(7, 7).unwrap(), 0..7);
    }

    #[test]
    fn seed_window_shows_center_cell() {
        let seed = Row::seed(size_info(4, 5).unwrap());
        assert_eq!(seed.window(5).unwrap(), &[0, 0, 1, 0, 0]);
    }
}
