//! Block-letter banner art for the hero section.

/// Rows in a banner glyph.
pub const BANNER_HEIGHT: usize = 5;

/// Large block letters (5 lines tall, 6 chars wide)
const LETTERS: [[&str; BANNER_HEIGHT]; 26] = [
    // A
    [" ████ ", "██  ██", "██████", "██  ██", "██  ██"],
    // B
    ["█████ ", "██  ██", "█████ ", "██  ██", "█████ "],
    // C
    [" ████ ", "██    ", "██    ", "██    ", " ████ "],
    // D
    ["█████ ", "██  ██", "██  ██", "██  ██", "█████ "],
    // E
    ["██████", "██    ", "█████ ", "██    ", "██████"],
    // F
    ["██████", "██    ", "█████ ", "██    ", "██    "],
    // G
    [" ████ ", "██    ", "██ ███", "██  ██", " ████ "],
    // H
    ["██  ██", "██  ██", "██████", "██  ██", "██  ██"],
    // I
    [" ████ ", "  ██  ", "  ██  ", "  ██  ", " ████ "],
    // J
    ["  ████", "   ██ ", "   ██ ", "██ ██ ", " ███  "],
    // K
    ["██  ██", "██ ██ ", "████  ", "██ ██ ", "██  ██"],
    // L
    ["██    ", "██    ", "██    ", "██    ", "██████"],
    // M
    ["██  ██", "██████", "██  ██", "██  ██", "██  ██"],
    // N
    ["██  ██", "███ ██", "██████", "██ ███", "██  ██"],
    // O
    [" ████ ", "██  ██", "██  ██", "██  ██", " ████ "],
    // P
    ["█████ ", "██  ██", "█████ ", "██    ", "██    "],
    // Q
    [" ████ ", "██  ██", "██  ██", "██ ██ ", " ██ ██"],
    // R
    ["█████ ", "██  ██", "█████ ", "██ ██ ", "██  ██"],
    // S
    [" █████", "██    ", " ████ ", "    ██", "█████ "],
    // T
    ["██████", "  ██  ", "  ██  ", "  ██  ", "  ██  "],
    // U
    ["██  ██", "██  ██", "██  ██", "██  ██", " ████ "],
    // V
    ["██  ██", "██  ██", "██  ██", " ████ ", "  ██  "],
    // W
    ["██  ██", "██  ██", "██  ██", "██████", "██  ██"],
    // X
    ["██  ██", " ████ ", "  ██  ", " ████ ", "██  ██"],
    // Y
    ["██  ██", " ████ ", "  ██  ", "  ██  ", "  ██  "],
    // Z
    ["██████", "   ██ ", "  ██  ", " ██   ", "██████"],
];

const SPACE: [&str; BANNER_HEIGHT] = ["  ", "  ", "  ", "  ", "  "];

/// Banner glyph for a character, if one exists.
pub fn glyph(c: char) -> Option<[&'static str; BANNER_HEIGHT]> {
    if c == ' ' {
        return Some(SPACE);
    }
    let c = c.to_ascii_uppercase();
    if c.is_ascii_uppercase() {
        Some(LETTERS[(c as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Build banner lines for a word; characters without a glyph are skipped.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    (0..BANNER_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_uniform() {
        for (i, letter) in LETTERS.iter().enumerate() {
            for row in letter {
                assert_eq!(
                    row.chars().count(),
                    6,
                    "letter {} row width",
                    (b'A' + i as u8) as char
                );
            }
        }
    }

    #[test]
    fn test_banner_covers_the_name() {
        for c in "Vrushabh Vakhare".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_banner_rows_align() {
        let banner = build_banner("Vakhare");
        assert_eq!(banner.len(), BANNER_HEIGHT);
        let width = banner[0].chars().count();
        assert!(banner.iter().all(|row| row.chars().count() == width));
    }
}
