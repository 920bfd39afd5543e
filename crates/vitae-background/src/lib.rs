//! Background animation rendering for the vitae portfolio.
//!
//! This crate provides the decorative animated backgrounds drawn behind
//! the portfolio content: a stateful particle network (moving points
//! with proximity links), a stateless procedurally generated
//! circuit-board motif, and a stateless starfield used behind the
//! welcome splash. Everything renders onto a character-cell raster that
//! is handed to ratatui as a single paragraph per frame.

mod animations;
mod chars;
mod color;
mod raster;
mod state;

pub use animations::circuit;
pub use animations::net::{Link, Particle, ParticleField};
pub use animations::starfield;
pub use color::{fade, hsl_to_rgb};
pub use raster::Raster;
pub use state::BackgroundState;
