//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. Later frames only emit the runs of glyphs that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        tracing::debug!("entered alternate screen");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        tracing::debug!("left alternate screen");
        Ok(())
    }

    /// Force the next present to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a framebuffer, diffing against the previously presented one.
    ///
    /// The caller keeps ownership of `fb` and may keep drawing into it; the
    /// renderer stores its own copy, reusing the allocation between frames.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Style> = None;
    for y in 0..fb.height() {
        for glyph in fb.row(y) {
            if current != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between two equally sized frames into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Style> = None;

    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for glyph in &next.row(y)[x as usize..(x + len) as usize] {
            if current != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of glyphs that differ between two frames.
///
/// A size mismatch marks every row dirty.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let w = next.width();

    if prev.width() != w || prev.height() != next.height() {
        for y in 0..next.height() {
            if w > 0 {
                runs.push((0, y, w));
            }
        }
        return runs;
    }

    for y in 0..next.height() {
        let (a, b) = (prev.row(y), next.row(y));
        let mut x = 0usize;
        while x < b.len() {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < b.len() && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y, (x - start) as u16));
        }
    }

    runs
}
