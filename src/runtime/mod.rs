use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use log::{error, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::RodioOutput;
use crate::config::Settings;
use crate::session::Session;

mod event_loop;
mod logging;
mod poll;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = Settings::load_or_default();
    if let Some(msg) = &config_warning {
        eprintln!("cadence: {msg}");
    }
    let log_file = logging::init(&settings.log);
    info!(
        "cadence {} starting, logging to {:?}",
        env!("CARGO_PKG_VERSION"),
        log_file
    );
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    // The only argument is where the folder picker starts.
    let browse_start = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let output = RodioOutput::open().inspect_err(|e| error!("{e}"))?;
    let session = Session::new(
        output,
        settings.library.clone(),
        settings.playback.clone(),
    );
    let mut app = App::new(session, browse_start, settings.library.include_hidden);
    app.open_browser();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("cadence exiting");
    run_result
}
