//! Cell buffer the animation layers draw into.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A width × height grid of optional coloured glyphs.
///
/// Later draws overwrite earlier ones, so layers are drawn back to front.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Option<(char, Color)>>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Draw a glyph. Positions outside the canvas are ignored.
    pub fn put(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = Some((ch, color));
    }

    /// The glyph at a position, if any.
    pub fn get(&self, x: u16, y: u16) -> Option<(char, Color)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Number of cells holding a glyph.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Convert to styled lines, one per row.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|y| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| match self.get(x, y) {
                        Some((ch, color)) => Span::styled(ch.to_string(), Style::new().fg(color)),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(4, 3);
        canvas.put(-1, 0, '*', Color::Red);
        canvas.put(4, 0, '*', Color::Red);
        canvas.put(0, 3, '*', Color::Red);
        assert_eq!(canvas.filled(), 0);

        canvas.put(3, 2, '*', Color::Red);
        assert_eq!(canvas.get(3, 2), Some(('*', Color::Red)));
    }

    #[test]
    fn test_later_draws_win() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(1, 1, 'a', Color::Red);
        canvas.put(1, 1, 'b', Color::Blue);
        assert_eq!(canvas.get(1, 1), Some(('b', Color::Blue)));
    }

    #[test]
    fn test_into_lines_shape() {
        let mut canvas = Canvas::new(3, 2);
        canvas.put(1, 0, 'x', Color::Red);
        let lines = canvas.into_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[1].content, "x");
        assert_eq!(lines[1].spans[0].content, " ");
    }
}
