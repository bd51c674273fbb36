use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioOutput;
use crate::config;
use crate::runtime::poll::PollTimer;
use crate::session::Transport;
use crate::ui;

/// Upper bound on how long input polling blocks, so the elapsed-time
/// display keeps moving between poll-loop ticks.
const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

/// Keys bound to the transport controls.
const TRANSPORT_KEYS: &[(KeyCode, Transport)] = &[
    (KeyCode::Char('p'), Transport::Play),
    (KeyCode::Char(' '), Transport::Pause),
    (KeyCode::Char('l'), Transport::Next),
    (KeyCode::Char('h'), Transport::Previous),
    (KeyCode::Char('s'), Transport::Stop),
];

fn transport_for(code: KeyCode) -> Option<Transport> {
    TRANSPORT_KEYS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, action)| action)
}

/// Main terminal event loop: draws, handles input and drives the
/// end-of-track poll. Returns `Ok(())` when the user quits.
pub fn run<O: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<O>,
) -> Result<(), Box<dyn std::error::Error>> {
    let interval = Duration::from_millis(settings.audio.poll_interval_ms);
    let mut poll = PollTimer::new(interval, Instant::now());

    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        let wait = poll.time_until_due(Instant::now()).min(REDRAW_INTERVAL);
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(key, app) {
                    break;
                }
            }
        }

        if poll.fire(Instant::now()) {
            app.tick();
        }
    }

    Ok(())
}

/// Apply one key press. Returns true when the app should exit.
fn handle_key_event<O: AudioOutput>(key: KeyEvent, app: &mut App<O>) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.transport(Transport::Stop);
        return true;
    }

    // A notice blocks everything else until it is dismissed.
    if app.notice().is_some() {
        app.dismiss_notice();
        return false;
    }

    if app.browser.is_some() {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(b) = app.browser.as_mut() {
                    b.move_down();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(b) = app.browser.as_mut() {
                    b.move_up();
                }
            }
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.browser_descend(),
            KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.browser_ascend(),
            KeyCode::Char(' ') => app.choose_browsed_folder(),
            KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('q') => app.close_browser(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.transport(Transport::Stop);
            return true;
        }
        KeyCode::Char('o') => app.open_browser(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Enter => app.play_selected(),
        code => {
            if let Some(action) = transport_for(code) {
                app.transport(action);
            }
        }
    }

    false
}
