//! Simulation configuration, resolved once at startup.
//!
//! Command-line overrides and the terminal size are combined into an immutable
//! [`SimConfig`] that is passed by value to the run loop.

use std::str::FromStr;
use std::time::Duration;

use crate::driver::Geometry;
use crate::error::{AutomatonError, Result};
use crate::rule::Rule;
use crate::types::{
    DEFAULT_PAUSE_MS, LABEL_ROWS, MAX_DISPLAY_WIDTH, MAX_GENERATIONS, MIN_TERMINAL_HEIGHT,
    PROMPT_ROWS, RULE_COUNT,
};

/// Which rules to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSelection {
    /// Run one rule.
    Single(Rule),
    /// Run all 256 rules in order, pausing between them.
    #[default]
    Cycle,
}

impl RuleSelection {
    /// The rules to run, in order.
    pub fn rules(self) -> impl Iterator<Item = Rule> {
        let range = match self {
            RuleSelection::Single(rule) => rule.id() as u16..rule.id() as u16 + 1,
            RuleSelection::Cycle => 0..RULE_COUNT,
        };
        range.map(|id| Rule::new(id as u8))
    }

    pub fn is_cycle(self) -> bool {
        matches!(self, RuleSelection::Cycle)
    }
}

impl FromStr for RuleSelection {
    type Err = AutomatonError;

    /// `"all"` selects every rule; anything else must be an integer 0-255.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RuleSelection::Cycle);
        }
        s.parse().map(RuleSelection::Single)
    }
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Values supplied on the command line. `None` means "derive a default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overrides {
    pub rule: RuleSelection,
    pub rows: Option<i64>,
    pub width: Option<i64>,
    /// The interactive viewer keeps the last terminal row for its footer.
    pub interactive: bool,
}

/// Fully resolved, immutable simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub selection: RuleSelection,
    pub geometry: Geometry,
    pub pause: Duration,
    /// Set when a requested or terminal width was even and got rounded down.
    pub width_adjusted: bool,
}

impl SimConfig {
    /// Resolve overrides against the terminal size.
    ///
    /// `terminal` is `None` when the size could not be queried (e.g. output is
    /// not a tty); resolution then only succeeds if no default is needed.
    pub fn resolve(overrides: Overrides, terminal: Option<TerminalSize>) -> Result<Self> {
        let requested_width = match overrides.width {
            Some(w) => bounded("width", w, MAX_DISPLAY_WIDTH)?,
            None => terminal.ok_or(AutomatonError::TerminalUnavailable)?.width as usize,
        };
        if let Some(term) = terminal {
            if requested_width > term.width as usize {
                return Err(AutomatonError::invalid_argument(format!(
                    "width {} exceeds terminal width {}",
                    requested_width, term.width
                )));
            }
        }
        let width = odd_floor(requested_width).ok_or_else(|| {
            AutomatonError::invalid_argument("width must be at least 1")
        })?;

        let rows = match overrides.rows {
            Some(r) => bounded("rows", r, MAX_GENERATIONS)?,
            None => default_rows(&overrides, terminal)?,
        };

        Ok(Self {
            selection: overrides.rule,
            geometry: Geometry::new(rows, width)?,
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
            width_adjusted: width != requested_width,
        })
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

/// `value` as a count in `1..=max`.
fn bounded(name: &str, value: i64, max: u16) -> Result<usize> {
    if value <= 0 {
        return Err(AutomatonError::invalid_argument(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    if value > i64::from(max) {
        return Err(AutomatonError::invalid_argument(format!(
            "{} {} is too large (at most {})",
            name, value, max
        )));
    }
    Ok(value as usize)
}

/// Largest odd value not above `n`.
fn odd_floor(n: usize) -> Option<usize> {
    match n {
        0 => None,
        n if n % 2 == 1 => Some(n),
        n => Some(n - 1),
    }
}

fn default_rows(overrides: &Overrides, terminal: Option<TerminalSize>) -> Result<usize> {
    let term = terminal.ok_or(AutomatonError::TerminalUnavailable)?;
    if term.height < MIN_TERMINAL_HEIGHT {
        return Err(AutomatonError::TerminalTooSmall {
            height: term.height,
            min: MIN_TERMINAL_HEIGHT,
        });
    }
    let reserved = match overrides.rule {
        RuleSelection::Cycle if !overrides.interactive => LABEL_ROWS,
        _ => LABEL_ROWS + PROMPT_ROWS,
    };
    let rows = term.height - reserved;
    if rows == 0 {
        return Err(AutomatonError::TerminalTooSmall {
            height: term.height,
            min: reserved + 1,
        });
    }
    Ok(rows as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: Option<TerminalSize> = Some(TerminalSize {
        width: 81,
        height: 24,
    });

    #[test]
    fn defaults_come_from_terminal() {
        let cfg = SimConfig::resolve(Overrides::default(), TERM).unwrap();
        assert!(cfg.selection.is_cycle());
        assert_eq!(cfg.geometry.display_width(), 81);
        assert_eq!(cfg.geometry.generations(), 19);
        assert_eq!(cfg.pause, Duration::from_millis(1000));
        assert!(!cfg.width_adjusted);

        let single = Overrides {
            rule: RuleSelection::Single(Rule::new(30)),
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(single, TERM).unwrap();
        assert_eq!(cfg.geometry.generations(), 18);
    }

    #[test]
    fn even_widths_round_down_to_odd() {
        let term = Some(TerminalSize::new(80, 24));
        let cfg = SimConfig::resolve(Overrides::default(), term).unwrap();
        assert_eq!(cfg.geometry.display_width(), 79);
        assert!(cfg.width_adjusted);

        let overrides = Overrides {
            width: Some(10),
            rows: Some(4),
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(overrides, term).unwrap();
        assert_eq!(cfg.geometry.display_width(), 9);
    }

    #[test]
    fn rejects_non_positive_and_oversized_values() {
        for overrides in [
            Overrides { width: Some(0), ..Overrides::default() },
            Overrides { width: Some(-3), ..Overrides::default() },
            Overrides { rows: Some(0), ..Overrides::default() },
            Overrides { width: Some(101), ..Overrides::default() },
        ] {
            assert!(matches!(
                SimConfig::resolve(overrides, TERM),
                Err(AutomatonError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn rejects_counts_that_would_exhaust_memory() {
        let too_many_rows = i64::from(MAX_GENERATIONS) + 1;
        for (rows, width) in [
            (4_611_686_018_427_387_904, 1),
            (too_many_rows, 1),
            (1, i64::MAX),
        ] {
            let overrides = Overrides {
                rows: Some(rows),
                width: Some(width),
                ..Overrides::default()
            };
            assert!(matches!(
                SimConfig::resolve(overrides, None),
                Err(AutomatonError::InvalidArgument(_))
            ));
        }

        let largest = Overrides {
            rows: Some(i64::from(MAX_GENERATIONS)),
            width: Some(1),
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(largest, None).unwrap();
        assert_eq!(cfg.geometry.generations(), usize::from(MAX_GENERATIONS));
    }

    #[test]
    fn interactive_keeps_a_row_for_the_footer() {
        let cycle = Overrides {
            interactive: true,
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(cycle, TERM).unwrap();
        assert_eq!(cfg.geometry.generations(), 18);

        let single = Overrides {
            rule: RuleSelection::Single(Rule::new(30)),
            interactive: true,
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(single, TERM).unwrap();
        assert_eq!(cfg.geometry.generations(), 18);
    }

    #[test]
    fn width_one_is_allowed_but_two_rounds_to_one() {
        let overrides = Overrides {
            width: Some(2),
            rows: Some(3),
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(overrides, TERM).unwrap();
        assert_eq!(cfg.geometry.display_width(), 1);
    }

    #[test]
    fn short_terminal_is_rejected_only_when_rows_are_derived() {
        let tiny = Some(TerminalSize::new(40, 5));
        assert_eq!(
            SimConfig::resolve(Overrides::default(), tiny),
            Err(AutomatonError::TerminalTooSmall { height: 5, min: 6 })
        );
        let single = Overrides {
            rule: RuleSelection::Single(Rule::new(1)),
            ..Overrides::default()
        };
        assert_eq!(
            SimConfig::resolve(single, Some(TerminalSize::new(40, 6))),
            Err(AutomatonError::TerminalTooSmall { height: 6, min: 7 })
        );

        let explicit = Overrides {
            rows: Some(3),
            ..Overrides::default()
        };
        assert!(SimConfig::resolve(explicit, tiny).is_ok());
    }

    #[test]
    fn missing_terminal_needs_explicit_size() {
        assert_eq!(
            SimConfig::resolve(Overrides::default(), None),
            Err(AutomatonError::TerminalUnavailable)
        );
        let explicit = Overrides {
            rows: Some(4),
            width: Some(5),
            ..Overrides::default()
        };
        let cfg = SimConfig::resolve(explicit, None).unwrap();
        assert_eq!(cfg.geometry.generations(), 4);
        assert_eq!(cfg.geometry.display_width(), 5);
    }

    #[test]
    fn rule_selection_parses_and_enumerates() {
        assert_eq!("all".parse::<RuleSelection>(), Ok(RuleSelection::Cycle));
        assert_eq!(
            "30".parse::<RuleSelection>(),
            Ok(RuleSelection::Single(Rule::new(30)))
        );
        assert!("256".parse::<RuleSelection>().is_err());

        let all: Vec<Rule> = RuleSelection::Cycle.rules().collect();
        assert_eq!(all.len(), 256);
        assert_eq!(all[0], Rule::new(0));
        assert_eq!(all[255], Rule::new(255));

        let one: Vec<Rule> = RuleSelection::Single(Rule::new(255)).rules().collect();
        assert_eq!(one, vec![Rule::new(255)]);
    }
}
