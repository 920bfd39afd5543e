//! Character constants for background animations.

/// Characters used for the starfield background.
pub const STAR_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Node characters by size, small to large.
pub const NODE_CHARS: &[char] = &['·', '•', '●'];

/// Trail characters for data-flow tails.
pub const TRAIL_CHAR: char = '∙';
