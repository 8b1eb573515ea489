//! Framebuffer and style types for terminal rendering.
//!
//! The game is drawn in plain ASCII, so a cell only carries a character and a
//! couple of text attributes.

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        dim: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        dim: false,
    };
    pub const DIM: Self = Self {
        bold: false,
        dim: true,
    };

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
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
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
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
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write `value` right-aligned in a field of `width` columns.
    ///
    /// Numbers wider than the field keep their low digits.
    pub fn put_number(&mut self, x: u16, y: u16, width: u16, value: u32, style: CellStyle) {
        let mut n = value;
        for i in (0..width).rev() {
            let ch = if i + 1 == width || n > 0 {
                char::from(b'0' + (n % 10) as u8)
            } else {
                ' '
            };
            self.put_char(x.saturating_add(i), y, ch, style);
            n /= 10;
        }
    }

    /// Characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn put_number_right_aligns() {
        let mut fb = FrameBuffer::new(8, 3);
        fb.put_number(0, 0, 4, 7, CellStyle::PLAIN);
        fb.put_number(0, 1, 4, 1200, CellStyle::PLAIN);
        fb.put_number(0, 2, 4, 0, CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "   7    ");
        assert_eq!(fb.row_text(1), "1200    ");
        assert_eq!(fb.row_text(2), "   0    ");
    }

    #[test]
    fn put_number_overwrites_stale_digits() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_number(0, 0, 4, 1234, CellStyle::PLAIN);
        fb.put_number(0, 0, 4, 5, CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "   5");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.cells().len(), 15);
        assert_eq!(fb.get(4, 2), Some(Cell::default()));
        assert_eq!(fb.get(5, 2), None);
        assert_eq!(fb.row_text(3), "");
    }
}
