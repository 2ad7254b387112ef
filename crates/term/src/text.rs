//! Plain-text output: glyph rows written to any `io::Write`.

use std::io::Write;

use anyhow::Result;

use crate::core::{Rule, RowSink};
use crate::types::{Bit, DEAD_GLYPH, LIVE_GLYPH};

/// The three visible banner lines for a rule.
///
/// ```
/// use tui_automata_term::rule_label;
/// use tui_automata_term::core::Rule;
///
/// assert_eq!(rule_label(Rule::new(30))[1], "||    Rule  30    ||");
/// ```
pub fn rule_label(rule: Rule) -> [String; 3] {
    let bar = "=".repeat(20);
    [bar.clone(), format!("||    Rule {:>3}    ||", rule.id()), bar]
}

/// Map a cell to its plain-text glyph.
#[inline]
pub fn glyph(bit: Bit) -> char {
    if bit == 0 {
        DEAD_GLYPH
    } else {
        LIVE_GLYPH
    }
}

/// [`RowSink`] printing a banner followed by one line of glyphs per generation.
pub struct TextRenderer<W: Write> {
    out: W,
    line: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RowSink for TextRenderer<W> {
    type Error = anyhow::Error;

    fn begin(&mut self, rule: Rule, _generations: usize) -> Result<()> {
        let [top, title, bottom] = rule_label(rule);
        write!(self.out, "\n{}\n{}\n{}\n\n", top, title, bottom)?;
        Ok(())
    }

    fn draw_row(&mut self, _generation: usize, cells: &[Bit]) -> Result<()> {
        self.line.clear();
        self.line.extend(cells.iter().map(|&b| glyph(b)));
        self.line.push('\n');
        self.out.write_all(self.line.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Driver, Geometry};

    #[test]
    fn label_pads_rule_to_three_columns() {
        assert_eq!(rule_label(Rule::new(7))[1], "||    Rule   7    ||");
        assert_eq!(rule_label(Rule::new(255))[1], "||    Rule 255    ||");
        assert_eq!(rule_label(Rule::new(0))[0].len(), 20);
    }

    #[test]
    fn prints_banner_then_rows() {
        let mut text = TextRenderer::new(Vec::new());
        Driver::new(Rule::new(30), Geometry::new(4, 5).unwrap())
            .run(&mut text)
            .unwrap();
        let out = String::from_utf8(text.into_inner()).unwrap();
        assert_eq!(
            out,
            "\n====================\n||    Rule  30    ||\n====================\n\n  #  \n ### \n##  #\n# ###\n"
        );
    }
}
