//! Content layout: the portfolio page as one tall line buffer.
//!
//! The page is rebuilt every frame (the typewriter line changes), but
//! section line offsets depend only on the width, so the scroll-to-
//! section mapping stays stable while scrolling.

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};
use vitae_content::{build_banner, PortfolioData, SchoolRecord};
use vitae_core::Section;

/// Widest the text column gets on large terminals.
const MAX_TEXT_WIDTH: u16 = 92;

/// Banner row colors, cyan fading toward white.
const BANNER_COLORS: [Color; 5] = [
    Color::Rgb(103, 232, 249),
    Color::Rgb(96, 205, 251),
    Color::Rgb(96, 165, 250),
    Color::Rgb(147, 197, 253),
    Color::Rgb(219, 234, 254),
];

/// The rendered page and where each section starts.
#[derive(Debug)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// First line index of each section, in [`Section::ALL`] order.
    pub offsets: [u16; 7],
}

impl Page {
    /// Section containing the given line.
    pub fn section_at(&self, line: u16) -> Section {
        section_for(&self.offsets, line)
    }

    pub fn total_lines(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Largest useful scroll offset for the given viewport height.
    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.total_lines().saturating_sub(viewport)
    }
}

/// Last section whose first line is at or above the given line.
pub fn section_for(offsets: &[u16; 7], line: u16) -> Section {
    let mut current = Section::Home;
    for (i, &offset) in offsets.iter().enumerate() {
        if offset <= line {
            current = Section::ALL[i];
        }
    }
    current
}

/// Build the whole page for the given terminal width.
pub fn build(data: &PortfolioData, hero_subtitle: &str, cursor_on: bool, width: u16) -> Page {
    let text_width = width.min(MAX_TEXT_WIDTH).saturating_sub(4).max(20) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut offsets = [0u16; 7];

    fn mark(section: Section, lines: &[Line<'static>], offsets: &mut [u16; 7]) {
        offsets[section.index()] = lines.len() as u16;
    }

    // Home: hero banner, typewriter, bio.
    mark(Section::Home, &lines, &mut offsets);
    lines.push(Line::raw(""));
    push_hero_name(&mut lines, data.personal.name, width);
    lines.push(Line::raw(""));

    let cursor = if cursor_on { "|" } else { " " };
    lines.push(
        Line::from(vec![
            Span::styled(hero_subtitle.to_owned(), Style::new().fg(Color::Gray)),
            Span::styled(cursor.to_owned(), Style::new().fg(Color::Blue)),
        ])
        .centered(),
    );
    lines.push(Line::raw(""));
    for row in wrap(data.personal.description, text_width) {
        lines.push(Line::from(row.dark_gray()).centered());
    }
    lines.push(Line::raw(""));
    lines.push(Line::from("⌄".dark_gray()).centered());
    lines.push(Line::raw(""));

    // About.
    mark(Section::About, &lines, &mut offsets);
    push_heading(&mut lines, Section::About, width);
    for row in wrap(data.about.description, text_width) {
        lines.push(body(row));
    }
    lines.push(Line::raw(""));
    for row in wrap(&data.about.highlights.join("  •  "), text_width) {
        lines.push(Line::from(Span::styled(
            format!("  {row}"),
            Style::new().fg(Color::Cyan),
        )));
    }
    lines.push(Line::raw(""));

    // Education.
    mark(Section::Education, &lines, &mut offsets);
    push_heading(&mut lines, Section::Education, width);
    push_school(&mut lines, &data.education.primary);
    lines.push(Line::raw(""));
    push_school(&mut lines, &data.education.secondary);
    lines.push(Line::raw(""));

    // Skills.
    mark(Section::Skills, &lines, &mut offsets);
    push_heading(&mut lines, Section::Skills, width);
    push_skill_group(&mut lines, "Technical", data.skills.technical, text_width);
    push_skill_group(&mut lines, "Soft skills", data.skills.soft, text_width);
    push_skill_group(&mut lines, "Languages", data.skills.languages, text_width);
    push_skill_group(
        &mut lines,
        "Certifications",
        data.skills.certifications,
        text_width,
    );

    // Experience.
    mark(Section::Experience, &lines, &mut offsets);
    push_heading(&mut lines, Section::Experience, width);
    for role in data.experience.roles {
        lines.push(Line::from(format!("  {}", role.title).bold()));
        lines.push(body(format!("{} — {}", role.company, role.duration)));
        lines.push(Line::raw(""));
    }
    lines.push(Line::from("  Honors".underlined()));
    for honor in data.experience.honors {
        lines.push(body(format!("▪ {honor}")));
    }
    lines.push(Line::raw(""));

    // Projects.
    mark(Section::Projects, &lines, &mut offsets);
    push_heading(&mut lines, Section::Projects, width);
    for project in data.projects {
        lines.push(Line::from(format!("  {}", project.name).bold().cyan()));
        for row in wrap(project.description, text_width) {
            lines.push(body(row));
        }
        for row in wrap(&format!("Stack: {}", project.technologies.join(", ")), text_width) {
            lines.push(Line::from(format!("  {row}").dark_gray()));
        }
        let metrics = project
            .achievements
            .iter()
            .map(|a| format!("{} {}", a.metric, a.label))
            .collect::<Vec<_>>()
            .join("   ");
        lines.push(Line::from(
            Span::styled(format!("  {metrics}"), Style::new().fg(Color::Green)),
        ));
        lines.push(body(format!("Max clock: {}", project.max_clock)));
        lines.push(Line::raw(""));
    }

    // Contact.
    mark(Section::Contact, &lines, &mut offsets);
    push_heading(&mut lines, Section::Contact, width);
    push_contact_row(&mut lines, "Email", data.contact.email);
    push_contact_row(&mut lines, "Phone", data.contact.phone);
    push_contact_row(&mut lines, "Location", data.contact.location);
    push_contact_row(&mut lines, "LinkedIn", data.contact.linkedin);
    lines.push(Line::raw(""));
    lines.push(Line::raw(""));

    Page { lines, offsets }
}

/// Block-letter name if it fits, plain styled text otherwise.
fn push_hero_name(lines: &mut Vec<Line<'static>>, name: &str, width: u16) {
    let mut words = name.split_whitespace().peekable();
    let mut used_banner = false;

    // Each word gets its own banner block; skip to plain text when the
    // widest word would not fit.
    let fits = name
        .split_whitespace()
        .all(|w| (w.chars().count() * 7).saturating_sub(1) <= width as usize);
    if fits {
        while let Some(word) = words.next() {
            for (row, text) in build_banner(word).into_iter().enumerate() {
                lines.push(
                    Line::from(Span::styled(
                        text,
                        Style::new().fg(BANNER_COLORS[row.min(BANNER_COLORS.len() - 1)]),
                    ))
                    .centered(),
                );
            }
            if words.peek().is_some() {
                lines.push(Line::raw(""));
            }
            used_banner = true;
        }
    }
    if !used_banner {
        lines.push(Line::from(name.to_owned().bold().cyan()).centered());
    }
}

fn push_heading(lines: &mut Vec<Line<'static>>, section: Section, width: u16) {
    let title = section.title();
    let tail_len = (width as usize)
        .saturating_sub(title.chars().count() + 8)
        .min(40);
    lines.push(Line::from(vec![
        Span::styled("── ".to_owned(), Style::new().fg(Color::DarkGray)),
        Span::styled(
            title.to_owned(),
            Style::new().fg(section.theme().primary).bold(),
        ),
        Span::styled(
            format!(" {}", "─".repeat(tail_len)),
            Style::new().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::raw(""));
}

fn push_school(lines: &mut Vec<Line<'static>>, record: &SchoolRecord) {
    lines.push(Line::from(format!("  {}", record.degree).bold()));
    lines.push(body(record.institution.to_owned()));
    lines.push(Line::from(
        format!("  {} • {}", record.score, record.duration).dark_gray(),
    ));
}

fn push_skill_group(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    items: &[&str],
    text_width: usize,
) {
    lines.push(Line::from(format!("  {label}").underlined()));
    for row in wrap(&items.join(", "), text_width) {
        lines.push(body(row));
    }
    lines.push(Line::raw(""));
}

fn push_contact_row(lines: &mut Vec<Line<'static>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {label:>9}  "), Style::new().fg(Color::DarkGray)),
        Span::raw(value.to_owned()),
    ]));
}

fn body(text: impl Into<String>) -> Line<'static> {
    Line::from(format!("  {}", text.into()))
}

/// Greedy word wrap to the given width.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if row_len > 0 && row_len + 1 + word_len > width {
            rows.push(std::mem::take(&mut row));
            row_len = 0;
        }
        if row_len > 0 {
            row.push(' ');
            row_len += 1;
        }
        row.push_str(word);
        row_len += word_len;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use vitae_content::PORTFOLIO;

    use super::*;

    #[test]
    fn test_offsets_are_monotonic() {
        let page = build(&PORTFOLIO, "RTL to GDSII", true, 100);
        for pair in page.offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(*page.offsets.last().unwrap() < page.total_lines());
    }

    #[test]
    fn test_section_at_maps_offsets_back() {
        let page = build(&PORTFOLIO, "", false, 100);
        assert_eq!(page.section_at(0), Section::Home);
        for section in Section::ALL {
            assert_eq!(page.section_at(page.offsets[section.index()]), section);
        }
        assert_eq!(page.section_at(u16::MAX), Section::Contact);
    }

    #[test]
    fn test_offsets_do_not_depend_on_the_typewriter() {
        let a = build(&PORTFOLIO, "", false, 100);
        let b = build(&PORTFOLIO, "a much longer subtitle", true, 100);
        assert_eq!(a.offsets, b.offsets);
        assert_eq!(a.total_lines(), b.total_lines());
    }

    #[test]
    fn test_narrow_terminal_falls_back_to_plain_name() {
        let wide = build(&PORTFOLIO, "", false, 120);
        let narrow = build(&PORTFOLIO, "", false, 40);
        // The banner is five rows per word; the fallback is one line.
        assert!(wide.offsets[1] > narrow.offsets[1]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("one two three four five six seven", 9);
        assert!(rows.iter().all(|r| r.chars().count() <= 9));
        assert_eq!(rows.join(" "), "one two three four five six seven");
    }

    #[test]
    fn test_wrap_handles_overlong_words() {
        let rows = wrap("antidisestablishmentarianism ok", 10);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_max_scroll() {
        let page = build(&PORTFOLIO, "", false, 100);
        assert_eq!(page.max_scroll(page.total_lines()), 0);
        assert_eq!(page.max_scroll(10), page.total_lines() - 10);
    }
}
