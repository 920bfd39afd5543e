//! Particle-net background (stateful).
//!
//! A fixed set of points drifts inside the viewport, bouncing off the
//! edges; pairs closer than the link range are joined by a line whose
//! brightness falls off linearly with distance.

use rand::{Rng, SeedableRng, rngs::StdRng};
use vitae_core::SectionTheme;

use crate::color::fade;
use crate::raster::Raster;

/// Total velocity-component spread per axis, in cells per step.
const SPEED: f32 = 0.4;

/// Link range as a fraction of the short viewport side.
const LINK_FRACTION: f32 = 0.45;
const LINK_RANGE_MIN: f32 = 4.0;
const LINK_RANGE_MAX: f32 = 140.0;

/// A single moving point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

/// A pair of particles close enough to be joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// 1.0 at zero distance, 0.0 at the link range.
    pub opacity: f32,
}

/// The particle field and its bounds.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    link_range: f32,
}

impl ParticleField {
    /// Seed `count` particles uniformly inside `[0,width] × [0,height]`
    /// with velocity components in ±[`SPEED`]/2 per step.
    ///
    /// A zero-area viewport yields stationary particles at the origin.
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let degenerate = width <= 0.0 || height <= 0.0;
        let particles = (0..count)
            .map(|_| {
                let x = if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 };
                let y = if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 };
                let (vx, vy) = if degenerate {
                    (0.0, 0.0)
                } else {
                    (
                        rng.gen_range(-SPEED / 2.0..SPEED / 2.0),
                        rng.gen_range(-SPEED / 2.0..SPEED / 2.0),
                    )
                };
                Particle { x, y, vx, vy }
            })
            .collect();

        Self {
            particles,
            width,
            height,
            link_range: (width.min(height) * LINK_FRACTION)
                .clamp(LINK_RANGE_MIN, LINK_RANGE_MAX),
        }
    }

    /// Advance every particle one step and reflect at the bounds.
    ///
    /// A component that leaves `[0, bound]` has its velocity sign
    /// flipped rather than its position clamped; the overshoot is at
    /// most one step's travel and self-corrects on the next step.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Update stored bounds. Particles are neither moved nor recreated;
    /// any now outside the new bounds bounce back within a few steps.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn link_range(&self) -> f32 {
        self.link_range
    }

    /// Brightness of a link at the given distance.
    pub fn link_opacity(&self, distance: f32) -> f32 {
        (1.0 - distance / self.link_range).max(0.0)
    }

    /// Every unordered pair currently within the link range.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        let range_sq = self.link_range * self.link_range;
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dx = self.particles[i].x - self.particles[j].x;
                let dy = self.particles[i].y - self.particles[j].y;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < range_sq {
                    let distance = dist_sq.sqrt();
                    links.push(Link {
                        a: i,
                        b: j,
                        distance,
                        opacity: self.link_opacity(distance),
                    });
                }
            }
        }
        links
    }

    /// Draw links then particles onto the raster. Particle state is not
    /// touched.
    pub fn render(&self, raster: &mut Raster, theme: &SectionTheme) {
        for link in self.links() {
            let a = self.particles[link.a];
            let b = self.particles[link.b];
            raster.line(a.x, a.y, b.x, b.y, fade(theme.primary, link.opacity));
        }
        for p in &self.particles {
            raster.set(p.x, p.y, '●', theme.secondary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_produces_count_particles_in_bounds() {
        let field = ParticleField::new(1024.0, 768.0, 48, 42);
        assert_eq!(field.len(), 48);
        for p in field.particles() {
            assert!((0.0..=1024.0).contains(&p.x));
            assert!((0.0..=768.0).contains(&p.y));
            assert!(p.vx.abs() <= SPEED / 2.0);
            assert!(p.vy.abs() <= SPEED / 2.0);
        }
    }

    #[test]
    fn test_zero_area_viewport_is_stationary() {
        let mut field = ParticleField::new(0.0, 0.0, 8, 1);
        field.advance();
        for p in field.particles() {
            assert_eq!((p.x, p.y), (0.0, 0.0));
            assert_eq!((p.vx, p.vy), (0.0, 0.0));
        }
    }

    #[test]
    fn test_bounce_flips_velocity_at_the_bounds() {
        // Small bounds force frequent bounces.
        let mut field = ParticleField::new(3.0, 3.0, 12, 9);
        let mut bounces = 0;
        for _ in 0..500 {
            let before = field.particles().to_vec();
            field.advance();
            for (old, new) in before.iter().zip(field.particles()) {
                let crossed_x = old.x + old.vx < 0.0 || old.x + old.vx > 3.0;
                if crossed_x {
                    assert_eq!(new.vx, -old.vx);
                    bounces += 1;
                } else {
                    assert_eq!(new.vx, old.vx);
                }
                let crossed_y = old.y + old.vy < 0.0 || old.y + old.vy > 3.0;
                if crossed_y {
                    assert_eq!(new.vy, -old.vy);
                } else {
                    assert_eq!(new.vy, old.vy);
                }
            }
        }
        assert!(bounces > 0, "expected at least one bounce");
    }

    #[test]
    fn test_no_particle_escapes_by_more_than_one_step() {
        let mut field = ParticleField::new(40.0, 12.0, 32, 1234);
        for _ in 0..1000 {
            field.advance();
            for p in field.particles() {
                assert!(p.x >= -p.vx.abs() && p.x <= 40.0 + p.vx.abs());
                assert!(p.y >= -p.vy.abs() && p.y <= 12.0 + p.vy.abs());
            }
        }
    }

    #[test]
    fn test_links_exist_iff_within_range() {
        let field = ParticleField::new(200.0, 200.0, 24, 5);
        let range = field.link_range();
        let links = field.links();
        let particles = field.particles();

        for link in &links {
            assert!(link.distance < range);
            assert!(link.opacity > 0.0 && link.opacity <= 1.0);
        }
        // Every in-range pair is present.
        let mut expected = 0;
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let dx = particles[i].x - particles[j].x;
                let dy = particles[i].y - particles[j].y;
                if (dx * dx + dy * dy).sqrt() < range {
                    expected += 1;
                }
            }
        }
        assert_eq!(links.len(), expected);
    }

    #[test]
    fn test_link_opacity_decreases_to_zero_at_range() {
        let field = ParticleField::new(100.0, 100.0, 2, 0);
        let range = field.link_range();
        assert_eq!(field.link_opacity(range), 0.0);
        assert_eq!(field.link_opacity(0.0), 1.0);
        let mut previous = f32::MAX;
        for step in 0..10 {
            let opacity = field.link_opacity(range * step as f32 / 10.0);
            assert!(opacity < previous);
            previous = opacity;
        }
    }

    #[test]
    fn test_resize_changes_bounds_not_count() {
        let mut field = ParticleField::new(100.0, 50.0, 40, 3);
        let before = field.particles().to_vec();
        field.resize(30.0, 20.0);
        assert_eq!(field.bounds(), (30.0, 20.0));
        assert_eq!(field.len(), 40);
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_hundred_steps_are_reproducible_and_bounded() {
        let mut a = ParticleField::new(1024.0, 768.0, 48, 0xDEC0DE);
        let mut b = ParticleField::new(1024.0, 768.0, 48, 0xDEC0DE);
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.particles(), b.particles());
        for p in a.particles() {
            assert!((0.0 - SPEED / 2.0..=1024.0 + SPEED / 2.0).contains(&p.x));
            assert!((0.0 - SPEED / 2.0..=768.0 + SPEED / 2.0).contains(&p.y));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = ParticleField::new(100.0, 100.0, 8, 1);
        let b = ParticleField::new(100.0, 100.0, 8, 2);
        assert_ne!(a.particles(), b.particles());
    }

    #[test]
    fn test_render_does_not_mutate_particles() {
        let field = ParticleField::new(60.0, 20.0, 16, 77);
        let before = field.particles().to_vec();
        let mut raster = Raster::new(60, 20);
        field.render(&mut raster, &vitae_core::Section::Home.theme());
        assert_eq!(field.particles(), &before[..]);
    }
}
