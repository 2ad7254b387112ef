//! Row engine - seed sizing, seed construction and the transition step
//!
//! Each cell of the next generation depends on three cells of the current
//! one, so a row of width `n` fully determines a row of width `n - 2`. To show
//! `g` generations that are each `w` cells wide without edge artifacts, the
//! seed therefore has to be `2 * (g - 1)` cells wider than `w`.
//!
//! Rows are never mutated in place: [`Row::step`] allocates the next row and
//! the caller replaces the old one wholesale.

use crate::error::{AutomatonError, Result};
use crate::rule::{pack_neighborhood, Rule};
use crate::types::Bit;

/// Seed row width and the index of its middle cell.
///
/// Only [`size_info`] builds one, so `middle < width` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeInfo {
    width: usize,
    middle: usize,
}

impl SizeInfo {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn middle(&self) -> usize {
        self.middle
    }
}

/// Size of the seed row needed for `generations` rows of `display_width` cells.
///
/// `display_width` must be odd so the seed has a middle cell.
pub fn size_info(generations: usize, display_width: usize) -> Result<SizeInfo> {
    if generations == 0 {
        return Err(AutomatonError::invalid_argument(
            "generation count must be at least 1",
        ));
    }
    if display_width == 0 {
        return Err(AutomatonError::invalid_argument(
            "display width must be at least 1",
        ));
    }
    if display_width % 2 == 0 {
        return Err(AutomatonError::invalid_argument(format!(
            "display width {} must be odd",
            display_width
        )));
    }

    let width = (generations - 1)
        .checked_mul(2)
        .and_then(|margin| margin.checked_add(display_width))
        .ok_or_else(|| AutomatonError::invalid_argument("seed row width overflows"))?;

    Ok(SizeInfo {
        width,
        middle: (width - 1) / 2,
    })
}

/// One generation of the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Box<[Bit]>,
}

impl Row {
    /// All-dead row with a single live cell at `info.middle`.
    pub fn seed(info: SizeInfo) -> Self {
        let mut cells = vec![0; info.width];
        cells[info.middle] = 1;
        Self {
            cells: cells.into_boxed_slice(),
        }
    }

    /// Build a row from explicit cells. Any non-zero value is a live cell.
    pub fn from_cells(cells: &[Bit]) -> Self {
        Self {
            cells: cells.iter().map(|&c| (c != 0) as Bit).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Bit] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Compute the next generation, two cells narrower than `self`.
    pub fn step(&self, rule: Rule) -> Result<Row> {
        if self.cells.len() < 3 {
            return Err(AutomatonError::invalid_state(format!(
                "cannot step a row of length {}: no complete neighborhood",
                self.cells.len()
            )));
        }

        let cells = self
            .cells
            .windows(3)
            .map(|w| rule.output(pack_neighborhood(w[0], w[1], w[2])))
            .collect();
        Ok(Row { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<Bit> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn size_info_follows_growth_law() {
        for g in 1..20usize {
            for w in (1..41usize).step_by(2) {
                let info = size_info(g, w).unwrap();
                assert_eq!(info.width, 2 * (g - 1) + w);
                assert_eq!(info.width % 2, 1);
                assert_eq!(info.middle, (info.width - 1) / 2);
            }
        }
    }

    #[test]
    fn size_info_rejects_bad_input() {
        assert!(matches!(size_info(0, 5), Err(AutomatonError::InvalidArgument(_))));
        assert!(matches!(size_info(4, 0), Err(AutomatonError::InvalidArgument(_))));
        assert!(matches!(size_info(4, 6), Err(AutomatonError::InvalidArgument(_))));
    }

    #[test]
    fn seed_has_single_live_cell_in_the_middle() {
        let info = size_info(4, 5).unwrap();
        let seed = Row::seed(info);
        assert_eq!(seed.len(), 11);
        assert_eq!(seed.cells(), bits("00000100000").as_slice());
        assert_eq!(seed.population(), 1);
        assert_eq!(seed.cells()[info.middle], 1);
    }

    #[test]
    fn seed_middle_is_always_inside_the_row() {
        for (g, w) in [(1, 1), (1, 7), (2, 1), (65_535, 65_535)] {
            let info = size_info(g, w).unwrap();
            assert!(info.middle() < info.width());
            let seed = Row::seed(info);
            assert_eq!(seed.population(), 1);
            assert_eq!(seed.cells()[info.middle()], 1);
        }
        assert_eq!(Row::seed(size_info(1, 1).unwrap()).cells(), &[1]);
    }

    #[test]
    fn step_shrinks_by_two() {
        let row = Row::from_cells(&bits("0110100111"));
        for r in [0u8, 30, 90, 110, 255] {
            assert_eq!(row.step(Rule::new(r)).unwrap().len(), row.len() - 2);
        }
        let three = Row::from_cells(&[1, 1, 1]);
        assert_eq!(three.step(Rule::new(128)).unwrap().cells(), &[1]);
    }

    #[test]
    fn step_on_short_row_is_invalid_state() {
        for len in 0..3 {
            let row = Row::from_cells(&vec![1; len]);
            assert!(matches!(
                row.step(Rule::new(30)),
                Err(AutomatonError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn rule_30_first_steps() {
        let rule = Rule::new(30);
        let seed = Row::seed(size_info(4, 5).unwrap());
        let g1 = seed.step(rule).unwrap();
        assert_eq!(g1.cells(), bits("000111000").as_slice());
        let g2 = g1.step(rule).unwrap();
        assert_eq!(g2.cells(), bits("0110010").as_slice());
        let g3 = g2.step(rule).unwrap();
        assert_eq!(g3.cells(), bits("10111").as_slice());
    }

    #[test]
    fn rule_90_is_sierpinski() {
        let rule = Rule::new(90);
        let seed = Row::seed(size_info(3, 5).unwrap());
        let g1 = seed.step(rule).unwrap();
        assert_eq!(g1.cells(), bits("0010100").as_slice());
        let g2 = g1.step(rule).unwrap();
        assert_eq!(g2.cells(), bits("10001").as_slice());
    }

    #[test]
    fn from_cells_normalizes_to_bits() {
        let row = Row::from_cells(&[0, 2, 255]);
        assert_eq!(row.cells(), &[0, 1, 1]);
    }
}
