use crate::app::{App, AppEvent, AppMode};
use crate::ui::keymap::key_to_app_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::render_app;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::{debug, info};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draw, wait for one event or a tick, repeat until the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let tick_rate = app.config().ui.tick_rate();
        info!("tui started");

        loop {
            app.tick(Instant::now());
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                info!("tui exiting");
                return Ok(());
            }

            if event::poll(tick_rate)? {
                let app_event = match event::read()? {
                    Event::Key(key) => key_to_app_event(key),
                    Event::Paste(text) => {
                        debug!(bytes = text.len(), "bracketed paste");
                        AppEvent::Paste(text)
                    }
                    // Resize and focus changes only need the redraw above
                    _ => AppEvent::None,
                };
                app.handle_event(app_event);
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        self.terminal.draw(|frame| render_app(frame, &state))?;
        Ok(())
    }
}
