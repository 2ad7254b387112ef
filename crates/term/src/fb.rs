//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

/// A single styled terminal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Style::default().glyph(' ')
    }
}

/// 2D grid of styled glyphs, row-major.
///
/// Writes outside the grid are silently clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.glyphs[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// One full row, or an empty slice when `y` is out of range.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Characters of row `y` as a string.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (dx, ch) in s.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else { break };
            let cx = x.saturating_add(dx);
            if cx >= self.width {
                break;
            }
            self.set(cx, y, style.glyph(ch));
        }
    }

    /// Write `s` horizontally centered on row `y`.
    pub fn put_str_centered(&mut self, y: u16, s: &str, style: Style) {
        let len = s.chars().count().min(u16::MAX as usize) as u16;
        let x = self.width.saturating_sub(len) / 2;
        self.put_str(x, y, s, style);
    }

    pub fn fill_row(&mut self, y: u16, glyph: Glyph) {
        for x in 0..self.width {
            self.set(x, y, glyph);
        }
    }
}
