//! # Folio CLI Entry Point
//!
//! This is the main entry point for the Folio TUI application.
//!
//! ## Overview
//!
//! Folio renders a bilingual personal portfolio in the terminal: profile,
//! experience timeline, and two infinite-loop carousels for collaborations
//! and presentations.
//!
//! ## Usage
//!
//! ```bash
//! # Open with saved preferences
//! folio
//!
//! # Force a language / theme for this run
//! folio --lang it --theme Light
//!
//! # Debug mode - print the resolved content and exit
//! folio --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` - Quit the application
//! - `Tab` / `Shift+Tab` / `↓` / `↑` - Move between sections
//! - `←` / `→` - Slide the carousels
//! - `Enter` - Open the selected presentation overlay
//! - `Esc` - Close the overlay
//! - `m` - Show more / fewer timeline entries
//! - `g` - Toggle language (English / Italian)
//! - `t` - Toggle theme (Dark / Light)
//!
//! Carousels also respond to the mouse: click a card to center it, click a
//! dot or the ‹ › controls to navigate, or drag horizontally to swipe.

use folio::content::{Lang, PortfolioContent};
use folio::ui;
use folio::ui::app::Strip;
use folio::ui::config::Config;
use folio::ui::theme::Theme;
use folio::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::time::{Duration, Instant};

/// Source of terminal events; a trait so tests can inject scripted input.
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// The real event source: crossterm poll + read.
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read input event")?))
        } else {
            Ok(None)
        }
    }
}

/// Folio - A bilingual terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A bilingual terminal portfolio", long_about = None)]
struct Args {
    /// Display language for this run (en or it); overrides the saved preference
    #[arg(short, long, value_name = "LANG")]
    lang: Option<String>,

    /// Theme for this run (Dark or Light); overrides the saved preference
    #[arg(short, long, value_name = "THEME")]
    theme: Option<String>,

    /// Print the resolved portfolio content and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // A panic must not leave the terminal in raw mode on the alternate
    // screen, so restore it before the default hook prints the message.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;
    let _ = panic::take_hook();
    result
}

async fn run_application(args: Args) -> Result<()> {
    // Saved preferences first, CLI overrides on top. A bad CLI value is an
    // error; a bad saved value silently degrades to the default.
    let config = Config::load();
    let lang = match args.lang.as_deref() {
        Some(code) => {
            Lang::from_code(code).with_context(|| format!("Unknown language: {code}"))?
        }
        None => config.language,
    };
    let theme = match args.theme.as_deref() {
        Some(name) => {
            Theme::by_name(name).with_context(|| format!("Unknown theme: {name}"))?
        }
        None => config.resolved_theme(),
    };

    // Load the embedded portfolio content
    let content = PortfolioContent::load_embedded()?;

    // Debug mode: print resolved content and exit
    if args.debug {
        let strings = content.strings(lang);
        println!("=== {} ===", content.profile.name);
        println!("{}\n", content.profile.tagline.get(lang));
        println!("--- {} ---", strings.section_titles.collaborations);
        for collab in &content.collaborations {
            let text = collab.text.get(lang);
            println!("  {} ({})  key={}", text.name, text.location, collab.key());
        }
        println!("\n--- {} ---", strings.section_titles.presentations);
        for pres in &content.presentations {
            let text = pres.text.get(lang);
            println!("  {} — {}  key={}", text.title, text.venue, pres.key());
        }
        println!(
            "\nTotal: {} collaborations, {} presentations, {} timeline entries",
            content.collaborations.len(),
            content.presentations.len(),
            content.timeline.len()
        );
        return Ok(());
    }

    // Enter the TUI: raw mode, alternate screen, and mouse reporting (the
    // carousels are click- and drag-driven).
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = App::new(content, lang, theme, size.width);

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Cleanup always runs; report the loop's error first when both fail.
    let cleanup_result = cleanup_terminal(&mut terminal);
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Leave the TUI and hand the terminal back.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Persist the current language/theme preferences; failures are reported but
/// never fatal.
fn persist_preferences(app: &App) {
    if let Err(e) = Config::snapshot(app.lang, app.theme).save() {
        eprintln!("Warning: Failed to save preferences: {e}");
    }
}

fn hit(rect: Option<Rect>, position: Position) -> bool {
    rect.is_some_and(|r| r.contains(position))
}

/// Route a mouse event into the application state.
fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // The overlay swallows all clicks while open
            if app.modal.is_some() {
                if hit(app.hits.modal_close, position)
                    || !hit(app.hits.modal, position)
                {
                    app.close_modal();
                }
                return;
            }

            if let Some(&(_, index)) = app
                .hits
                .nav_items
                .iter()
                .find(|(rect, _)| rect.contains(position))
            {
                app.go_to_section(index);
                return;
            }
            if hit(app.hits.lang_toggle, position) {
                app.toggle_language();
                persist_preferences(app);
                return;
            }
            if hit(app.hits.theme_toggle, position) {
                app.toggle_theme();
                persist_preferences(app);
                return;
            }
            if hit(app.hits.timeline_toggle, position) {
                app.toggle_timeline();
                return;
            }

            for strip in [Strip::Collaborations, Strip::Presentations] {
                let hits = match strip {
                    Strip::Collaborations => app.hits.collaborations.clone(),
                    Strip::Presentations => app.hits.presentations.clone(),
                };
                let carousel = match strip {
                    Strip::Collaborations => &mut app.collaborations,
                    Strip::Presentations => &mut app.presentations,
                };
                if hit(hits.prev, position) {
                    carousel.prev(now);
                    return;
                }
                if hit(hits.next, position) {
                    carousel.next(now);
                    return;
                }
                if let Some(&(_, dot)) =
                    hits.dots.iter().find(|(rect, _)| rect.contains(position))
                {
                    carousel.go_to_slide(dot, now);
                    return;
                }
                if hit(hits.strip, position) {
                    app.begin_drag(strip, mouse.column, now);
                    return;
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_drag(mouse.column, mouse.row, now);
        }
        _ => {}
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        // Fire deferred carousel work (slide animation, wrap correction,
        // debounced resize) before drawing.
        app.tick(Instant::now());

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Use a short timeout while animating so slides stay smooth
        let poll_timeout = if app.is_animating() {
            Duration::from_millis(16) // ~60fps while a slide is in flight
        } else {
            Duration::from_millis(100) // Idle
        };

        let event = event_reader.read_event(poll_timeout)?;

        // If no event, continue the loop (re-render for animations)
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        let now = Instant::now();
        match event {
            Event::Key(key) => {
                // Handle overlay close first
                if app.modal.is_some() {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => {
                            app.close_modal();
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('t') | KeyCode::Char('T') => {
                        app.toggle_theme();
                        persist_preferences(app);
                    }
                    KeyCode::Char('g') | KeyCode::Char('G') => {
                        app.toggle_language();
                        persist_preferences(app);
                    }
                    KeyCode::Char('m') | KeyCode::Char('M') => {
                        app.toggle_timeline();
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        app.next_section();
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        app.prev_section();
                    }
                    KeyCode::Left => {
                        app.nav_prev(now);
                    }
                    KeyCode::Right => {
                        app.nav_next(now);
                    }
                    KeyCode::Enter => {
                        app.open_modal_for_active();
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                handle_mouse(app, mouse, now);
            }
            Event::Resize(width, _) => {
                app.on_resize(width, now);
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    /// Scripted event source: hands out a fixed sequence, then None.
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    /// Helper to create a key event
    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_mock_event_reader_replays_in_order() {
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Char('g')),
            key_event(KeyCode::Right),
        ]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('g'),
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Right,
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        // CrosstermEventReader must stay object-safe behind the trait
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::try_parse_from(["folio"]).expect("parse");
        assert!(args.lang.is_none());
        assert!(args.theme.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_args_parsing_overrides() {
        let args =
            Args::try_parse_from(["folio", "--lang", "it", "--theme", "Light"]).expect("parse");
        assert_eq!(args.lang.as_deref(), Some("it"));
        assert_eq!(args.theme.as_deref(), Some("Light"));
    }

    #[tokio::test]
    async fn test_run_application_rejects_unknown_language() {
        let args = Args {
            lang: Some("xx".to_string()),
            theme: None,
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Unknown language"));
    }

    #[tokio::test]
    async fn test_run_application_rejects_unknown_theme() {
        let args = Args {
            lang: None,
            theme: Some("Sepia".to_string()),
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Unknown theme"));
    }

    #[tokio::test]
    async fn test_run_application_debug_mode_exits_cleanly() {
        let args = Args {
            lang: Some("en".to_string()),
            theme: Some("Dark".to_string()),
            debug: true,
        };

        let result = run_application(args).await;
        assert!(result.is_ok());
    }
}
