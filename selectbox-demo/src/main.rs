mod app;
mod hit;
mod terminal;

use std::fs::{self, File};
use std::io;
use std::time::Duration;

use selectbox::{SelectConfig, SelectError};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::app::DemoApp;
use crate::terminal::Terminal;

#[derive(Debug, Error)]
enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid config {path}: {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Load a `SelectConfig` from a JSON file, or use the defaults.
fn load_config(path: Option<String>) -> Result<SelectConfig, DemoError> {
    let Some(path) = path else {
        return Ok(SelectConfig::default());
    };
    let text = fs::read_to_string(&path)?;
    serde_json::from_str(&text).map_err(|source| DemoError::Config { path, source })
}

fn run() -> Result<(), DemoError> {
    let log_file = File::create("selectbox-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let config = load_config(std::env::args().nth(1))?;
    log::info!("Starting selectbox demo with {:?}", config);
    let mut app = DemoApp::new(config)?;

    let mut term = Terminal::new()?;
    app.draw(&mut term)?;

    while !app.should_quit() {
        let events = term.poll(Duration::from_millis(250))?;
        if events.is_empty() {
            continue;
        }
        for event in events {
            app.handle(event);
        }
        app.draw(&mut term)?;
    }

    log::info!("Exiting");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
