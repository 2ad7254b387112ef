use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use tui_automata::core::{Driver, SimConfig};
use tui_automata::term::TextRenderer;

/// Print every selected rule as plain text, calling `pause` between rules.
pub fn run<W: Write>(config: SimConfig, out: W, mut pause: impl FnMut(Duration)) -> Result<()> {
    let mut text = TextRenderer::new(out);

    for (i, rule) in config.selection.rules().enumerate() {
        if i > 0 {
            pause(config.pause);
        }
        debug!(rule = rule.id(), "printing rule");
        Driver::new(rule, config.geometry).run(&mut text)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_automata::core::{Overrides, Rule, RuleSelection};

    fn config(rule: RuleSelection, rows: i64, width: i64) -> SimConfig {
        let overrides = Overrides {
            rule,
            rows: Some(rows),
            width: Some(width),
            interactive: false,
        };
        SimConfig::resolve(overrides, None).unwrap()
    }

    #[test]
    fn single_rule_never_pauses() {
        let mut out = Vec::new();
        let mut pauses = 0;
        run(
            config(RuleSelection::Single(Rule::new(0)), 3, 3),
            &mut out,
            |_| pauses += 1,
        )
        .unwrap();
        assert_eq!(pauses, 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\n\n # \n   \n   \n"));
    }

    #[test]
    fn cycling_pauses_between_each_rule() {
        let mut out = Vec::new();
        let mut pauses = Vec::new();
        run(
            config(RuleSelection::Cycle, 1, 1).with_pause(Duration::from_millis(5)),
            &mut out,
            |d| pauses.push(d),
        )
        .unwrap();
        assert_eq!(pauses.len(), 255);
        assert!(pauses.iter().all(|&d| d == Duration::from_millis(5)));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("||    Rule").count(), 256);
        assert!(text.contains("||    Rule 255    ||"));
    }
}
