//! Rule module - Wolfram codes as 8-entry lookup tables
//!
//! An elementary rule is a single byte. Bit `n` of the byte is the next value
//! of a cell whose neighborhood, read as a 3-bit number, equals `n`:
//!
//! ```text
//! neighborhood  111 110 101 100 011 010 001 000
//! rule 30         0   0   0   1   1   1   1   0   = 0b0001_1110
//! ```
//!
//! The left neighbor is the most significant bit, the right neighbor the least.

use std::fmt;
use std::str::FromStr;

use crate::error::{AutomatonError, Result};
use crate::types::{Bit, NEIGHBORHOOD_COUNT, NEIGHBORHOOD_MASK};

/// An elementary cellular automaton rule (Wolfram code 0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(u8);

impl Rule {
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Build a rule from an unchecked integer, e.g. a command-line value.
    pub fn from_id(id: i64) -> Result<Self> {
        u8::try_from(id).map(Self).map_err(|_| {
            AutomatonError::invalid_argument(format!("rule {} is outside 0-255", id))
        })
    }

    /// The Wolfram code.
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Next cell value for a packed neighborhood.
    ///
    /// The neighborhood is masked to its low 3 bits, so out-of-range inputs
    /// never panic. Use [`Rule::try_output`] to reject them instead.
    #[inline(always)]
    pub const fn output(self, neighborhood: u8) -> Bit {
        (self.0 >> (neighborhood & NEIGHBORHOOD_MASK)) & 1
    }

    /// Strict form of [`Rule::output`].
    pub fn try_output(self, neighborhood: u8) -> Result<Bit> {
        if neighborhood >= NEIGHBORHOOD_COUNT {
            return Err(AutomatonError::invalid_argument(format!(
                "neighborhood {} is outside 0-7",
                neighborhood
            )));
        }
        Ok(self.output(neighborhood))
    }

    /// The full lookup table, indexed by neighborhood.
    pub fn table(self) -> [Bit; NEIGHBORHOOD_COUNT as usize] {
        std::array::from_fn(|n| self.output(n as u8))
    }

    /// Following rule, wrapping 255 -> 0.
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Preceding rule, wrapping 0 -> 255.
    pub const fn prev(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }
}

impl From<u8> for Rule {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.0)
    }
}

impl FromStr for Rule {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self> {
        let id: i64 = s.trim().parse().map_err(|_| {
            AutomatonError::invalid_argument(format!("rule '{}' is not an integer", s))
        })?;
        Self::from_id(id)
    }
}

/// Pack three cells into a neighborhood index (left is the high bit).
#[inline(always)]
pub const fn pack_neighborhood(left: Bit, center: Bit, right: Bit) -> u8 {
    ((left & 1) << 2) | ((center & 1) << 1) | (right & 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_matches_bit_of_rule_for_every_rule() {
        for r in 0..=255u8 {
            let rule = Rule::new(r);
            for n in 0..8u8 {
                let out = rule.output(n);
                assert_eq!(out, (r >> n) & 1, "rule {} neighborhood {}", r, n);
                assert!(out <= 1);
            }
        }
    }

    #[test]
    fn rule_30_table() {
        assert_eq!(Rule::new(30).table(), [0, 1, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn output_masks_neighborhood_to_three_bits() {
        let rule = Rule::new(30);
        assert_eq!(rule.output(8), rule.output(0));
        assert_eq!(rule.output(0b1010), rule.output(0b010));
    }

    #[test]
    fn try_output_rejects_out_of_range_neighborhood() {
        let rule = Rule::new(110);
        assert_eq!(rule.try_output(7), Ok(0));
        assert!(matches!(
            rule.try_output(8),
            Err(AutomatonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_id_validates_range() {
        assert_eq!(Rule::from_id(0), Ok(Rule::new(0)));
        assert_eq!(Rule::from_id(255), Ok(Rule::new(255)));
        assert!(matches!(
            Rule::from_id(256),
            Err(AutomatonError::InvalidArgument(_))
        ));
        assert!(matches!(
            Rule::from_id(-1),
            Err(AutomatonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn parses_from_str() {
        assert_eq!(" 90 ".parse::<Rule>(), Ok(Rule::new(90)));
        assert!("abc".parse::<Rule>().is_err());
        assert!("300".parse::<Rule>().is_err());
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Rule::new(255).next(), Rule::new(0));
        assert_eq!(Rule::new(0).prev(), Rule::new(255));
        assert_eq!(Rule::new(30).next().prev(), Rule::new(30));
    }

    #[test]
    fn pack_neighborhood_orders_left_high() {
        assert_eq!(pack_neighborhood(1, 0, 0), 4);
        assert_eq!(pack_neighborhood(0, 1, 0), 2);
        assert_eq!(pack_neighborhood(0, 0, 1), 1);
        assert_eq!(pack_neighborhood(1, 1, 1), 7);
    }
}
