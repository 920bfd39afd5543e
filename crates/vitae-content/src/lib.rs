//! Static content for the vitae terminal portfolio.
//!
//! Everything here is an opaque read-only record as far as the rest of
//! the application is concerned: the portfolio data itself, the welcome
//! greetings, and the block-letter banner art used by the hero section.

mod banner;
mod data;

pub use banner::{build_banner, glyph, BANNER_HEIGHT};
pub use data::{
    About, Achievement, Contact, Education, Experience, Personal, PortfolioData, Project, Role,
    SchoolRecord, Skills, GREETINGS, PORTFOLIO,
};
