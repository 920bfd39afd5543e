//! Starfield background (stateless).

use ratatui::style::Color;
use vitae_core::ViewContext;

use crate::chars::STAR_CHARS;
use crate::raster::Raster;

/// Stamp twinkling stars across the whole raster.
///
/// Each cell derives a deterministic pseudo-random value from its
/// position and the current twinkle time bucket; ~3% of cells show a
/// star in one of three brightness tiers.
pub fn stamp(raster: &mut Raster, view: &ViewContext) {
    let period = view.speed.twinkle_period_ms();
    let frame_num = (view.elapsed_ms / period) as usize;

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let seed = (x as usize)
                .wrapping_mul(31)
                .wrapping_add((y as usize).wrapping_mul(17))
                .wrapping_add(frame_num);

            if seed % 100 < 3 {
                let ch = STAR_CHARS[seed % STAR_CHARS.len()];
                let color = match seed % 3 {
                    0 => Color::Rgb(60, 60, 80),
                    1 => Color::Rgb(100, 100, 140),
                    _ => Color::Rgb(150, 150, 200),
                };
                raster.set(x as f32, y as f32, ch, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vitae_core::{AnimationSpeed, Section};

    use super::*;

    fn view(elapsed_ms: u64) -> ViewContext {
        ViewContext {
            width: 80,
            height: 24,
            elapsed_ms,
            scroll: 0,
            section: Section::Home,
            pointer: None,
            speed: AnimationSpeed::Medium,
        }
    }

    fn star_cells(view: &ViewContext) -> Vec<(u16, u16, char)> {
        let mut raster = Raster::new(view.width, view.height);
        stamp(&mut raster, view);
        let mut cells = Vec::new();
        for y in 0..view.height {
            for x in 0..view.width {
                if let Some((ch, _)) = raster.get(x, y) {
                    cells.push((x, y, ch));
                }
            }
        }
        cells
    }

    #[test]
    fn test_same_time_bucket_is_deterministic() {
        let v = view(1000);
        assert_eq!(star_cells(&v), star_cells(&v));
        // Within one twinkle period the field does not change.
        assert_eq!(star_cells(&view(800)), star_cells(&view(1500)));
    }

    #[test]
    fn test_stars_reroll_across_buckets() {
        assert_ne!(star_cells(&view(0)), star_cells(&view(5000)));
    }

    #[test]
    fn test_star_density_is_sparse() {
        let v = view(0);
        let count = star_cells(&v).len();
        let cells = v.width as usize * v.height as usize;
        assert!(count > 0);
        assert!(count < cells / 10, "{count} stars in {cells} cells");
    }
}
