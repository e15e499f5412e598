//! Dil Mil - Terminal Dating App Prototype
//!
//! A client-side, mock-data prototype of a dating application: welcome
//! screen, phone login stub, multi-step onboarding, a swipeable
//! profile-discovery deck, and a matches/chat screen. All data is embedded;
//! there is no network, persistence, or backend.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, Screen};
use infrastructure::MockData;
use presentation::{render_ui, InputHandler};

/// How long the event loop waits for input before advancing time-based
/// state; roughly one frame at 60 fps so card animations stay smooth.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Entry point for the terminal prototype.
///
/// Sets up the terminal interface (raw mode, alternate screen, mouse
/// capture for the swipe gesture), loads the embedded mock data, and runs
/// the main event loop until the user quits from the welcome screen.
///
/// # Errors
///
/// Returns an error if terminal setup fails, if the embedded mock data does
/// not parse, or if there are issues with the terminal interface during
/// runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = MockData::load()
        .map_err(Into::into)
        .and_then(|data| run_app(&mut terminal, &mut App::new(data)));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the current screen, waits up to one tick for input, and then
/// advances time-based state (the mock login delay and the card
/// animations). Quits on 'q' or Esc from the welcome screen.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| render_ui(f, app, Instant::now()))?;

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc
                        if matches!(app.screen, Screen::Welcome) =>
                    {
                        return Ok(());
                    }
                    _ => InputHandler::handle_key_event(
                        app,
                        key.code,
                        key.modifiers,
                        Instant::now(),
                    ),
                },
                Event::Mouse(mouse) => {
                    InputHandler::handle_mouse_event(app, mouse, Instant::now());
                }
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}
