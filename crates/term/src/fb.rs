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

    /// Move each channel `amount` steps toward white
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().cell(' ')
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.cell(ch));
    }

    /// Write `s` starting at (x, y), clipped at the right edge.
    /// Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut written = 0u16;
        for ch in s.chars() {
            let cx = x.saturating_add(written);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            written += 1;
        }
        written
    }

    /// Write `s` centered in the span `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        let offset = w.saturating_sub(len) / 2;
        self.put_str(x.saturating_add(offset), y, s, style);
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let len = decimal_digits(value, &mut digits);
        for (i, &d) in digits[..len].iter().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, d as char, style);
        }
        len as u16
    }

    /// Write a decimal number centered in the span `[x, x + w)`.
    pub fn put_u32_centered(&mut self, x: u16, w: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let len = decimal_digits(value, &mut digits) as u16;
        let offset = w.saturating_sub(len) / 2;
        self.put_u32(x.saturating_add(offset), y, value, style);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Collect row `y` into a string (tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

/// Most-significant digit first into `buf`; returns the digit count.
fn decimal_digits(value: u32, buf: &mut [u8; 10]) -> usize {
    let mut n = value;
    let mut len = 0;
    loop {
        buf[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    buf[..len].reverse();
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits_left_to_right() {
        let mut fb = FrameBuffer::new(12, 1);
        let style = CellStyle::default();
        assert_eq!(fb.put_u32(1, 0, 2048, style), 4);
        assert_eq!(fb.row_text(0), " 2048       ");

        fb.clear(Cell::default());
        assert_eq!(fb.put_u32(0, 0, 0, style), 1);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');
    }

    #[test]
    fn put_u32_centered_matches_centered_text() {
        let style = CellStyle::default();
        for value in [0, 2, 16, 2048, 131072, u32::MAX] {
            let mut digits = FrameBuffer::new(12, 1);
            digits.put_u32_centered(1, 7, 0, value, style);
            let mut text = FrameBuffer::new(12, 1);
            text.put_str_centered(1, 7, 0, &value.to_string(), style);
            assert_eq!(digits.row_text(0), text.row_text(0), "{}", value);
        }
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let written = fb.put_str(2, 0, "SCORE", CellStyle::default());
        assert_eq!(written, 2);
        assert_eq!(fb.row_text(0), "  SC");
    }

    #[test]
    fn put_str_centered_pads_both_sides() {
        let mut fb = FrameBuffer::new(7, 1);
        fb.put_str_centered(0, 7, 0, "16", CellStyle::default());
        assert_eq!(fb.row_text(0), "  16   ");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(5, 5, CellStyle::default().cell('x'));
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(2, 0), None);
    }

    #[test]
    fn lighten_saturates() {
        assert_eq!(Rgb::new(250, 10, 0).lighten(20), Rgb::new(255, 30, 20));
    }
}
