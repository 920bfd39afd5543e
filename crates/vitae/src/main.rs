use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use vitae_background::BackgroundState;
use vitae_config::Config;
use vitae_content::{GREETINGS, PORTFOLIO};
use vitae_core::{AnimationSpeed, BackgroundStyle, Section, ViewContext};

use crate::splash::Splash;
use crate::typewriter::Typewriter;

mod sections;
mod splash;
mod typewriter;

/// Event poll timeout per frame (~60 fps).
const FRAME_BUDGET: Duration = Duration::from_millis(16);
/// Minimum interval between pointer position updates.
const POINTER_THROTTLE: Duration = Duration::from_millis(16);
/// Minimum interval between scroll-driven section re-detections.
const SECTION_THROTTLE: Duration = Duration::from_millis(200);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let mouse_capture = config.mouse_capture;

    let terminal = ratatui::init();
    if mouse_capture {
        let _ = execute!(stdout(), EnableMouseCapture);
    }
    let result = App::new(config).run(terminal);
    if mouse_capture {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
    ratatui::restore();
    result
}

/// Which screen is showing.
#[derive(Debug)]
enum Screen {
    Splash(Splash),
    Page,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current screen.
    screen: Screen,
    /// Background animation state.
    background: BackgroundState,
    /// Selected background style.
    style: BackgroundStyle,
    /// Selected animation speed.
    speed: AnimationSpeed,
    /// Hero typewriter state.
    typewriter: Typewriter,
    /// Scroll offset into the page, in lines.
    scroll: u16,
    /// Section currently in view.
    section: Section,
    /// Last known pointer position, in cells.
    pointer: Option<(u16, u16)>,
    /// Section line offsets from the last rendered page.
    section_offsets: [u16; 7],
    /// Content viewport height from the last render.
    page_viewport: u16,
    /// Startup instant; drives all animation clocks.
    started: Instant,
    /// Previous update instant, for frame deltas.
    last_tick: Instant,
    last_pointer_update: Instant,
    last_section_update: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        let screen = if config.show_welcome {
            Screen::Splash(Splash::new(GREETINGS.len()))
        } else {
            Screen::Page
        };
        let now = Instant::now();
        Self {
            running: false,
            screen,
            background: BackgroundState::new(config.particle_count, config.particle_seed),
            style: config.background,
            speed: config.speed,
            typewriter: Typewriter::new(PORTFOLIO.personal.rotating_titles),
            scroll: 0,
            section: Section::Home,
            pointer: None,
            section_offsets: [0; 7],
            page_viewport: 0,
            started: now,
            last_tick: now,
            last_pointer_update: now,
            last_section_update: now,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.update();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Advance the time-driven state machines.
    fn update(&mut self) {
        let delta_ms = self.last_tick.elapsed().as_millis() as u64;
        self.last_tick = Instant::now();

        match &mut self.screen {
            Screen::Splash(splash) => {
                splash.tick(delta_ms);
                if splash.is_done() {
                    self.screen = Screen::Page;
                }
            }
            Screen::Page => self.typewriter.tick(delta_ms),
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let view = ViewContext {
            width: area.width,
            height: area.height,
            elapsed_ms,
            scroll: self.scroll,
            section: self.section,
            pointer: self.pointer,
            speed: self.speed,
        };

        if matches!(self.screen, Screen::Splash(_)) {
            self.background
                .render(frame, BackgroundStyle::Starfield, &view);
            self.render_splash(frame, elapsed_ms);
        } else {
            self.background.render(frame, self.style, &view);
            self.render_page(frame, elapsed_ms);
        }
    }

    /// Render the welcome splash over the starfield.
    fn render_splash(&self, frame: &mut Frame, elapsed_ms: u64) {
        let Screen::Splash(splash) = &self.screen else {
            return;
        };
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1), // headline
            Constraint::Length(1),
            Constraint::Length(1), // caption
            Constraint::Length(1),
            Constraint::Length(1), // divider / dots
            Constraint::Fill(1),
            Constraint::Length(1), // hint
        ])
        .split(area);

        if splash.is_finale() {
            let name = Paragraph::new(Line::from(
                PORTFOLIO.personal.name.to_owned().bold().cyan(),
            ))
            .centered();
            frame.render_widget(name, chunks[1]);
            frame.render_widget(
                Paragraph::new("ASIC Physical Design Portfolio".gray()).centered(),
                chunks[3],
            );

            // Three loader dots, one highlighted in turn.
            let lit = (elapsed_ms / 300) as usize % 3;
            let dots: Vec<Span> = (0..3)
                .flat_map(|i| {
                    let color = if i == lit {
                        Color::Rgb(96, 165, 250)
                    } else {
                        Color::Rgb(60, 70, 100)
                    };
                    [
                        Span::styled("●", Style::new().fg(color)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            frame.render_widget(Paragraph::new(Line::from(dots)).centered(), chunks[5]);
        } else {
            let (text, lang) = GREETINGS[splash.greeting_index().min(GREETINGS.len() - 1)];
            frame.render_widget(
                Paragraph::new(Line::from(text.bold().white())).centered(),
                chunks[1],
            );
            frame.render_widget(Paragraph::new(lang.dark_gray()).centered(), chunks[3]);
        }

        frame.render_widget(
            Paragraph::new("press any key".dark_gray()).centered(),
            chunks[7],
        );
    }

    /// Render the portfolio page: nav bar, content, help line.
    fn render_page(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_nav(frame, chunks[0]);

        let cursor_on = elapsed_ms / 500 % 2 == 0;
        let page = sections::build(
            &PORTFOLIO,
            &self.typewriter.text(),
            cursor_on,
            chunks[1].width,
        );
        self.scroll = self.scroll.min(page.max_scroll(chunks[1].height));
        self.section_offsets = page.offsets;
        self.page_viewport = chunks[1].height;
        frame.render_widget(
            Paragraph::new(page.lines).scroll((self.scroll, 0)),
            chunks[1],
        );

        self.render_help(frame, chunks[2]);
    }

    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for section in Section::ALL {
            let label = format!(" {} ", section.title());
            if section == self.section {
                spans.push(Span::styled(
                    label,
                    Style::new().fg(self.section.theme().primary).bold(),
                ));
            } else {
                spans.push(Span::styled(label, Style::new().fg(Color::DarkGray)));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let accent = self.section.theme().primary;
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "tab".bold().fg(accent),
            " sections  ".dark_gray(),
            "j/k".bold().fg(accent),
            " scroll  ".dark_gray(),
            "b".bold().fg(accent),
            " background  ".dark_gray(),
            "s".bold().fg(accent),
            " speed".dark_gray(),
        ]);

        let status = format!(
            "{} • {} • {}",
            self.style.label(),
            self.speed.label(),
            Local::now().format("%a, %b %d  %H:%M"),
        );
        let status_len = status.chars().count() as u16;
        let row = Layout::horizontal([Constraint::Fill(1), Constraint::Length(status_len + 1)])
            .split(area);

        frame.render_widget(Paragraph::new(help), row[0]);
        frame.render_widget(Paragraph::new(status.dark_gray()).right_aligned(), row[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_BUDGET)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // Any other key skips the splash.
        if let Screen::Splash(splash) = &mut self.screen {
            splash.skip();
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Tab => self.jump_to(self.section.next()),
            KeyCode::BackTab => self.jump_to(self.section.prev()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(section) = Section::from_digit(c.to_digit(10).unwrap_or(0)) {
                    self.jump_to(section);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll_by(self.page_viewport.saturating_sub(2) as i32)
            }
            KeyCode::PageUp => self.scroll_by(-(self.page_viewport.saturating_sub(2) as i32)),
            KeyCode::Home => {
                self.scroll = 0;
                self.sync_section(true);
            }
            KeyCode::End => {
                // Clamped to the real maximum at the next render.
                self.scroll = u16::MAX;
                self.sync_section(true);
            }
            KeyCode::Char('b') => self.style = self.style.next(),
            KeyCode::Char('s') => self.speed = self.speed.next(),
            _ => {}
        }
    }

    /// Handles mouse events: pointer tracking and wheel scrolling.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if let Screen::Splash(splash) = &mut self.screen {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                splash.skip();
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Moved => {
                if self.last_pointer_update.elapsed() >= POINTER_THROTTLE {
                    self.pointer = Some((mouse.column, mouse.row));
                    self.last_pointer_update = Instant::now();
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => {}
        }
    }

    /// Scroll by a signed number of lines.
    fn scroll_by(&mut self, delta: i32) {
        self.scroll = if delta >= 0 {
            self.scroll.saturating_add(delta as u16)
        } else {
            self.scroll.saturating_sub((-delta) as u16)
        };
        self.sync_section(false);
    }

    /// Jump straight to a section's first line.
    fn jump_to(&mut self, section: Section) {
        self.scroll = self.section_offsets[section.index()];
        self.section = section;
        self.last_section_update = Instant::now();
    }

    /// Re-derive the current section from the scroll offset.
    ///
    /// Scroll-driven calls are throttled; explicit jumps pass `force`.
    fn sync_section(&mut self, force: bool) {
        if !force && self.last_section_update.elapsed() < SECTION_THROTTLE {
            return;
        }
        // A section counts as current once it reaches the upper part
        // of the viewport.
        let probe = self
            .scroll
            .saturating_add(self.page_viewport * 2 / 5);
        self.section = sections::section_for(&self.section_offsets, probe);
        self.last_section_update = Instant::now();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
