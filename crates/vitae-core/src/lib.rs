//! Core types for the vitae terminal portfolio.
//!
//! Shared between the application shell and the background animation
//! crate: section identifiers, background styles, animation speed, the
//! per-section color palette, and the explicit view context handed to
//! every renderer.

use std::str::FromStr;

use ratatui::style::Color;

/// Named content sections of the portfolio page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Education,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Heading shown in the rendered page.
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Position of this section within [`Section::ALL`].
    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, saturating at the last.
    pub fn next(self) -> Section {
        let i = self.index();
        Section::ALL[(i + 1).min(Section::ALL.len() - 1)]
    }

    /// Previous section, saturating at the first.
    pub fn prev(self) -> Section {
        let i = self.index();
        Section::ALL[i.saturating_sub(1)]
    }

    /// Section for a 1-based jump key, if in range.
    pub fn from_digit(d: u32) -> Option<Section> {
        Section::ALL.get(d.checked_sub(1)? as usize).copied()
    }
}

/// Available decorative background styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundStyle {
    /// Moving points with proximity links.
    #[default]
    ParticleNet,
    /// Radial circuit-board motif with data flows.
    CircuitBoard,
    /// Sparse twinkling stars.
    Starfield,
    /// No background.
    None,
}

impl BackgroundStyle {
    /// Cycle to the next style.
    pub fn next(self) -> BackgroundStyle {
        match self {
            BackgroundStyle::ParticleNet => BackgroundStyle::CircuitBoard,
            BackgroundStyle::CircuitBoard => BackgroundStyle::Starfield,
            BackgroundStyle::Starfield => BackgroundStyle::None,
            BackgroundStyle::None => BackgroundStyle::ParticleNet,
        }
    }

    /// Short label for the help line.
    pub fn label(self) -> &'static str {
        match self {
            BackgroundStyle::ParticleNet => "particles",
            BackgroundStyle::CircuitBoard => "circuit",
            BackgroundStyle::Starfield => "starfield",
            BackgroundStyle::None => "none",
        }
    }
}

impl FromStr for BackgroundStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "particles" | "particle-net" | "net" => Ok(BackgroundStyle::ParticleNet),
            "circuit" | "circuit-board" => Ok(BackgroundStyle::CircuitBoard),
            "starfield" | "stars" => Ok(BackgroundStyle::Starfield),
            "none" | "off" => Ok(BackgroundStyle::None),
            _ => Err(()),
        }
    }
}

/// Animation speed setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> AnimationSpeed {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Short label for the help line.
    pub fn label(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }

    /// Multiplier applied to per-step particle travel.
    pub fn step_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Multiplier applied to elapsed time in stateless animations.
    pub fn time_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 1.8,
        }
    }

    /// Star twinkle re-roll period in milliseconds.
    pub fn twinkle_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 1200,
            AnimationSpeed::Medium => 800,
            AnimationSpeed::Fast => 400,
        }
    }
}

impl FromStr for AnimationSpeed {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(AnimationSpeed::Slow),
            "medium" | "normal" => Ok(AnimationSpeed::Medium),
            "fast" => Ok(AnimationSpeed::Fast),
            _ => Err(()),
        }
    }
}

/// Per-section background palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTheme {
    /// Main stroke color for traces and links.
    pub primary: Color,
    /// Secondary color for nodes and glyphs.
    pub secondary: Color,
    /// Dim accent for trails and grid dust.
    pub accent: Color,
}

impl Section {
    /// Background palette while this section is current.
    pub fn theme(self) -> SectionTheme {
        let (primary, secondary, accent) = match self {
            Section::Home => ((59, 130, 246), (147, 197, 253), (96, 112, 160)),
            Section::About => ((16, 185, 129), (110, 231, 183), (70, 120, 100)),
            Section::Education => ((139, 92, 246), (196, 181, 253), (110, 95, 160)),
            Section::Skills => ((251, 146, 60), (253, 186, 116), (160, 110, 70)),
            Section::Experience => ((239, 68, 68), (252, 165, 165), (150, 80, 80)),
            Section::Projects => ((59, 130, 246), (147, 197, 253), (96, 112, 160)),
            Section::Contact => ((236, 72, 153), (251, 207, 232), (150, 85, 120)),
        };
        SectionTheme {
            primary: Color::Rgb(primary.0, primary.1, primary.2),
            secondary: Color::Rgb(secondary.0, secondary.1, secondary.2),
            accent: Color::Rgb(accent.0, accent.1, accent.2),
        }
    }
}

/// Explicit bundle of everything a background renderer may read.
///
/// The animators never consult globals; the app shell fills this in
/// once per frame from the terminal, the clock, and its own scroll and
/// pointer bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    /// Viewport width in cells.
    pub width: u16,
    /// Viewport height in cells.
    pub height: u16,
    /// Milliseconds since the app started.
    pub elapsed_ms: u64,
    /// Current scroll offset in lines.
    pub scroll: u16,
    /// Section currently in view.
    pub section: Section,
    /// Pointer position in cells, if mouse capture is active.
    pub pointer: Option<(u16, u16)>,
    /// Animation speed setting.
    pub speed: AnimationSpeed,
}

impl ViewContext {
    /// Elapsed time in seconds, scaled by the speed setting.
    pub fn time_s(&self) -> f32 {
        self.elapsed_ms as f32 / 1000.0 * self.speed.time_scale()
    }
}
