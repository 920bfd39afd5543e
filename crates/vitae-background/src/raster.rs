//! Character-cell raster the background painters draw into.
//!
//! A frame's background is composed here cell by cell and then handed
//! to ratatui as one paragraph. Later writes win, so painters stamp
//! back-to-front.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// One frame's worth of background cells.
#[derive(Debug)]
pub struct Raster {
    width: u16,
    height: u16,
    cells: Vec<Option<(char, Color)>>,
}

impl Raster {
    /// Create an empty raster for the given area.
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

    /// Stamp a single cell. Non-finite or out-of-bounds coordinates are
    /// dropped silently.
    pub fn set(&mut self, x: f32, y: f32, ch: char, color: Color) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (xi, yi) = (x.round(), y.round());
        if xi < 0.0 || yi < 0.0 || xi >= self.width as f32 || yi >= self.height as f32 {
            return;
        }
        let idx = yi as usize * self.width as usize + xi as usize;
        self.cells[idx] = Some((ch, color));
    }

    /// Read a cell back (used by tests).
    pub fn get(&self, x: u16, y: u16) -> Option<(char, Color)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Stamp a straight segment, picking a glyph from the slope.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return;
        }
        let (dx, dy) = (x2 - x1, y2 - y1);
        let ch = line_char(dx, dy);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.set(x1 + dx * t, y1 + dy * t, ch, color);
        }
    }

    /// Stamp a string centered on the given cell.
    pub fn text_centered(&mut self, x: f32, y: f32, text: &str, color: Color) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let len = text.chars().count() as f32;
        let start = x - len / 2.0;
        for (i, ch) in text.chars().enumerate() {
            if ch != ' ' {
                self.set(start + i as f32, y, ch, color);
            }
        }
    }

    /// Convert the raster into paragraph lines, one span per cell.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width as usize;
        (0..self.height as usize)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| match self.cells[y * width + x] {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Glyph for a segment with the given direction.
fn line_char(dx: f32, dy: f32) -> char {
    if dx.abs() >= dy.abs() * 2.0 {
        '─'
    } else if dy.abs() >= dx.abs() * 2.0 {
        '│'
    } else if (dx >= 0.0) == (dy >= 0.0) {
        // Screen y grows downward.
        '╲'
    } else {
        '╱'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYAN: Color = Color::Rgb(0, 234, 255);

    #[test]
    fn test_set_and_get() {
        let mut raster = Raster::new(10, 4);
        raster.set(3.2, 1.7, '●', CYAN);
        assert_eq!(raster.get(3, 2), Some(('●', CYAN)));
        assert_eq!(raster.get(0, 0), None);
    }

    #[test]
    fn test_out_of_bounds_and_non_finite_are_dropped() {
        let mut raster = Raster::new(10, 4);
        raster.set(-1.0, 0.0, 'x', CYAN);
        raster.set(10.0, 0.0, 'x', CYAN);
        raster.set(f32::NAN, 0.0, 'x', CYAN);
        raster.set(0.0, f32::INFINITY, 'x', CYAN);
        raster.line(f32::NAN, 0.0, 5.0, 2.0, CYAN);
        assert!((0..10).all(|x| (0..4).all(|y| raster.get(x, y).is_none())));
    }

    #[test]
    fn test_line_touches_both_endpoints() {
        let mut raster = Raster::new(20, 10);
        raster.line(2.0, 2.0, 14.0, 2.0, CYAN);
        assert_eq!(raster.get(2, 2), Some(('─', CYAN)));
        assert_eq!(raster.get(14, 2), Some(('─', CYAN)));
        assert_eq!(raster.get(8, 2), Some(('─', CYAN)));
    }

    #[test]
    fn test_line_char_follows_slope() {
        assert_eq!(line_char(10.0, 1.0), '─');
        assert_eq!(line_char(1.0, 10.0), '│');
        assert_eq!(line_char(5.0, 5.0), '╲');
        assert_eq!(line_char(5.0, -5.0), '╱');
    }

    #[test]
    fn test_into_lines_covers_the_area() {
        let mut raster = Raster::new(4, 2);
        raster.set(0.0, 0.0, '·', CYAN);
        let lines = raster.into_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 4);
    }
}
