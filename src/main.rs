use std::process::ExitCode;

mod app;
mod audio;
mod browser;
mod config;
mod error;
mod library;
mod playlist;
mod runtime;
mod session;
mod ui;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cadence: {e}");
            ExitCode::FAILURE
        }
    }
}
