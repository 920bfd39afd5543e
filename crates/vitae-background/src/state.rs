//! Background animation state management.

use ratatui::{Frame, widgets::Paragraph};
use vitae_core::{BackgroundStyle, ViewContext};

use crate::animations::{circuit, net::ParticleField, starfield};
use crate::raster::Raster;

/// Fixed particle simulation rate, in steps per second.
const STEPS_PER_SECOND: f32 = 60.0;

/// Cap on catch-up steps after a stall, so a long pause does not burst
/// the simulation forward.
const MAX_STEPS_PER_FRAME: u32 = 8;

/// Background animation state.
///
/// Owns the particle field and the fixed-timestep accumulator that
/// converts wall-clock deltas into whole `advance()` steps; the
/// stateless animations borrow it only for the seed.
#[derive(Debug)]
pub struct BackgroundState {
    /// Particle field, created lazily on the first particle-net frame.
    field: Option<ParticleField>,
    /// Particle count used when (re)creating the field.
    particle_count: usize,
    /// Seed for particle placement and scattered circuit nodes.
    seed: u64,
    /// Last render time in milliseconds.
    last_update_ms: u64,
    /// Fractional steps carried between frames.
    step_accumulator: f32,
}

impl BackgroundState {
    /// Create a new background state. Without an explicit seed, one is
    /// captured from the system clock.
    pub fn new(particle_count: usize, seed: Option<u64>) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });

        Self {
            field: None,
            particle_count,
            seed,
            last_update_ms: 0,
            step_accumulator: 0.0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Render the background for this frame.
    pub fn render(&mut self, frame: &mut Frame, style: BackgroundStyle, view: &ViewContext) {
        if style == BackgroundStyle::None {
            return;
        }

        let area = frame.area();
        let mut raster = Raster::new(area.width, area.height);
        let theme = view.section.theme();

        match style {
            BackgroundStyle::ParticleNet => {
                let field = self.field_for(view);
                field.render(&mut raster, &theme);
            }
            BackgroundStyle::CircuitBoard => {
                let circuit_frame = circuit::generate(view, self.seed);
                circuit::render(&circuit_frame, &mut raster, &theme);
            }
            BackgroundStyle::Starfield => starfield::stamp(&mut raster, view),
            BackgroundStyle::None => {}
        }

        frame.render_widget(Paragraph::new(raster.into_lines()), area);
    }

    /// Ensure the particle field exists and is stepped up to `view`'s
    /// clock, resizing its bounds if the viewport changed.
    fn field_for(&mut self, view: &ViewContext) -> &ParticleField {
        let (w, h) = (view.width as f32, view.height as f32);
        let (count, seed) = (self.particle_count, self.seed);

        let field = self
            .field
            .get_or_insert_with(|| ParticleField::new(w, h, count, seed));
        if field.bounds() != (w, h) {
            field.resize(w, h);
        }

        let delta_ms = view.elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = view.elapsed_ms;

        self.step_accumulator +=
            delta_ms as f32 / 1000.0 * STEPS_PER_SECOND * view.speed.step_scale();
        let steps = (self.step_accumulator as u32).min(MAX_STEPS_PER_FRAME);
        self.step_accumulator -= self.step_accumulator.floor();
        for _ in 0..steps {
            field.advance();
        }

        field
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

    #[test]
    fn test_explicit_seed_is_kept() {
        let state = BackgroundState::new(48, Some(99));
        assert_eq!(state.seed(), 99);
    }

    #[test]
    fn test_field_is_created_lazily_and_resized() {
        let mut state = BackgroundState::new(16, Some(1));
        assert!(state.field.is_none());
        state.field_for(&view(0));
        assert_eq!(state.field.as_ref().unwrap().bounds(), (80.0, 24.0));

        let mut wider = view(16);
        wider.width = 120;
        state.field_for(&wider);
        let field = state.field.as_ref().unwrap();
        assert_eq!(field.bounds(), (120.0, 24.0));
        assert_eq!(field.len(), 16);
    }

    #[test]
    fn test_steps_follow_the_clock() {
        let mut state = BackgroundState::new(8, Some(2));
        state.field_for(&view(0));
        let before = state.field.as_ref().unwrap().particles().to_vec();

        // 50 ms at 60 steps/s is three whole steps.
        state.field_for(&view(50));
        let after = state.field.as_ref().unwrap().particles().to_vec();
        assert_ne!(before, after);

        let mut reference = ParticleField::new(80.0, 24.0, 8, 2);
        for _ in 0..3 {
            reference.advance();
        }
        assert_eq!(after, reference.particles());
    }

    #[test]
    fn test_stall_catch_up_is_capped() {
        let mut state = BackgroundState::new(8, Some(3));
        state.field_for(&view(0));

        // A ten-second stall must not step 600 times.
        state.field_for(&view(10_000));
        let after = state.field.as_ref().unwrap().particles().to_vec();

        let mut reference = ParticleField::new(80.0, 24.0, 8, 3);
        for _ in 0..MAX_STEPS_PER_FRAME {
            reference.advance();
        }
        assert_eq!(after, reference.particles());
    }
}
