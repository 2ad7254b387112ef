//! AutomatonView: maps automaton rows into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! ```text
//!                                     <- blank
//!          ====================
//!          ||    Rule  30    ||       <- banner (LABEL_ROWS rows)
//!          ====================
//!                                     <- blank
//!                   █                 <- generation 0
//!                  ███                <- generation 1
//!                  ...
//!  rule 30  gen 2/18      n next  p prev  r replay  q quit   <- footer
//! ```

use anyhow::Result;

use crate::core::{AutomatonError, Geometry, Rule, RowSink};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::text::rule_label;
use crate::types::{Bit, LABEL_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyphs and colors for dead and live cells.
///
/// Live cells fade from `young` (generation 0) to `old` (last generation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dead: char,
    pub live: char,
    pub young: Rgb,
    pub old: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: ' ',
            live: '█',
            young: Rgb::new(255, 196, 64),
            old: Rgb::new(64, 128, 255),
        }
    }
}

impl Palette {
    pub fn live_style(&self, generation: usize, generations: usize) -> Style {
        let t = if generations > 1 {
            generation as f32 / (generations - 1) as f32
        } else {
            0.0
        };
        Style::fg(self.young.lerp(self.old, t))
    }
}

/// Status shown in the footer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub rule: Rule,
    pub drawn: usize,
    pub generations: usize,
    pub paused: bool,
    pub cycling: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AutomatonView {
    palette: Palette,
}

impl AutomatonView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Clear the frame and draw the banner for `rule`.
    pub fn begin_frame(&self, fb: &mut FrameBuffer, viewport: Viewport, rule: Rule) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let banner = Style::fg(Rgb::new(200, 200, 200)).bold();
        for (i, line) in rule_label(rule).iter().enumerate() {
            fb.put_str_centered(1 + i as u16, line, banner);
        }
    }

    /// First framebuffer row used by generation 0.
    pub fn grid_top(&self) -> u16 {
        LABEL_ROWS
    }

    /// Column of the first visible cell for rows `display_width` wide.
    pub fn origin_x(&self, viewport: Viewport, display_width: usize) -> u16 {
        let w = display_width.min(viewport.width as usize) as u16;
        (viewport.width - w) / 2
    }

    /// Draw one cell of generation `generation`.
    pub fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        bit: Bit,
        generation: usize,
        generations: usize,
    ) {
        let glyph = if bit == 1 {
            self.palette
                .live_style(generation, generations)
                .glyph(self.palette.live)
        } else {
            Style::default().glyph(self.palette.dead)
        };
        fb.set(x, y, glyph);
    }

    /// Draw the visible cells of one generation starting at `(origin_x, origin_y)`.
    pub fn draw_row(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cells: &[Bit],
        generation: usize,
        generations: usize,
    ) {
        for (dx, &bit) in cells.iter().enumerate() {
            let Ok(dx) = u16::try_from(dx) else { break };
            let x = origin_x.saturating_add(dx);
            if x >= fb.width() {
                break;
            }
            self.draw_cell(fb, x, origin_y, bit, generation, generations);
        }
    }

    /// Draw the status line on the last row of the frame.
    pub fn draw_footer(&self, fb: &mut FrameBuffer, progress: &Progress) {
        let Some(y) = fb.height().checked_sub(1) else {
            return;
        };
        let bar = Style {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        fb.fill_row(y, bar.glyph(' '));

        let state = if progress.paused { "  [paused]" } else { "" };
        let status = format!(
            " rule {:>3}  gen {}/{}{}",
            progress.rule.id(),
            progress.drawn,
            progress.generations,
            state
        );
        fb.put_str(0, y, &status, bar.bold());

        let keys = if progress.cycling {
            "n next  p prev  r replay  space pause  q quit "
        } else {
            "n next  p prev  r replay  q quit "
        };
        let len = keys.chars().count() as u16;
        let status_len = status.chars().count() as u16;
        if status_len + len < fb.width() {
            fb.put_str(fb.width() - len, y, keys, bar.dim());
        }
    }
}

/// [`RowSink`] that paints rows into a framebuffer through an [`AutomatonView`].
///
/// Rows that would land on the footer line or below are clipped.
pub struct FrameSink<'a> {
    view: &'a AutomatonView,
    fb: &'a mut FrameBuffer,
    viewport: Viewport,
    geometry: Geometry,
}

impl<'a> FrameSink<'a> {
    pub fn new(
        view: &'a AutomatonView,
        fb: &'a mut FrameBuffer,
        viewport: Viewport,
        geometry: Geometry,
    ) -> Self {
        Self {
            view,
            fb,
            viewport,
            geometry,
        }
    }
}

impl RowSink for FrameSink<'_> {
    type Error = anyhow::Error;

    fn begin(&mut self, rule: Rule, _generations: usize) -> Result<()> {
        self.view.begin_frame(self.fb, self.viewport, rule);
        Ok(())
    }

    fn draw_row(&mut self, generation: usize, cells: &[Bit]) -> Result<()> {
        let width = self.geometry.display_width();
        if cells.len() != width {
            return Err(AutomatonError::InvalidState(format!(
                "row of {} cells drawn into a {} wide view",
                cells.len(),
                width
            ))
            .into());
        }

        let footer = self.viewport.height.saturating_sub(1);
        let Some(y) = u16::try_from(generation)
            .ok()
            .and_then(|g| g.checked_add(self.view.grid_top()))
            .filter(|&y| y < footer)
        else {
            return Ok(());
        };

        let x = self.view.origin_x(self.viewport, width);
        self.view.draw_row(
            self.fb,
            x,
            y,
            cells,
            generation,
            self.geometry.generations(),
        );
        Ok(())
    }
}
