mod app;
mod config;
mod logging;
mod ui;

use app::App;
use app::tmdb::{MovieSource, TmdbClient};
use config::{API_KEY_ENV, AppConfig};

use std::ffi::OsString;
use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;

/// Flag that writes the effective config to disk and exits instead of
/// starting the UI.
const WRITE_CONFIG_FLAG: &str = "--write-config";

fn main() -> Result<()> {
    let config_path = config::resolve_config_path()?;
    let config = AppConfig::load(&config_path)?;

    if wants_config_write(std::env::args_os().skip(1)) {
        config.save(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    if let Some(log_path) = logging::log_file_path() {
        if let Err(error) = logging::init(&log_path, &config.log.filter) {
            eprintln!("Warning: logging disabled: {:#}", error);
        }
    }
    tracing::info!(config = %config_path.display(), "starting");

    let source: Option<Arc<dyn MovieSource>> =
        match config.resolve_api_key(std::env::var(API_KEY_ENV).ok()) {
            Some(api_key) => {
                let client: Arc<dyn MovieSource> = Arc::new(
                    TmdbClient::new(&config.tmdb.base_url, &api_key)
                        .context("failed to build HTTP client")?,
                );
                Some(client)
            }
            None => {
                tracing::warn!("no TMDB API key configured");
                None
            }
        };

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let mut app = App::new(source, config.ui.backdrop);
    if config.ui.backdrop {
        app.picker = Some(Picker::from_query_stdio().unwrap_or_else(|error| {
            tracing::debug!(?error, "terminal graphics query failed, using half blocks");
            Picker::halfblocks()
        }));
    }
    app.load_popular();

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(error) = &result {
        tracing::error!(%error, "event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply whatever the fetch workers have reported
        app.drain_messages();
        app.tick();

        // Poll for events with a timeout to allow UI updates
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if handle_key(app, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.handle_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }
}

fn wants_config_write(mut args: impl Iterator<Item = OsString>) -> bool {
    args.any(|arg| arg == WRITE_CONFIG_FLAG)
}

/// Applies one key press. Returns true when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // A notice blocks everything until acknowledged
    if !app.notices.is_empty() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.acknowledge_notice();
        }
        return false;
    }

    // Handle search input when searching is active
    if app.searching {
        match key.code {
            KeyCode::Char(c) => {
                app.query.push(c);
            }
            KeyCode::Backspace => {
                app.query.pop();
            }
            KeyCode::Enter => {
                app.searching = false;
                app.submit_search();
            }
            KeyCode::Esc => {
                app.searching = false;
                app.query.clear();
            }
            _ => {}
        }
        return false;
    }

    if app.selected.is_some() {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Backspace => app.dismiss(),
            KeyCode::Enter | KeyCode::Char('o') => app.open_trailer(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') | KeyCode::Char('s') => {
            if app.has_source() {
                app.searching = true;
            }
        }
        KeyCode::Char('r') => app.retry(),
        KeyCode::Down | KeyCode::Char('j') => app.next_movie(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_movie(),
        KeyCode::Enter => app.activate_highlighted(),
        _ => {}
    }
    false
}
