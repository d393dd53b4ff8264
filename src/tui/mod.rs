pub mod app;
pub mod colors;
pub mod input;
pub mod table;
pub mod ui;

use crate::client::TrendsSource;
use crate::error::{ExplorerError, Result};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;

/// Entry point: take over the terminal until the user quits
pub fn run(source: Arc<dyn TrendsSource>, keyword: &str) -> Result<()> {
    log::info!(target: "TUI", "starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| ExplorerError::Terminal(e.to_string()))
        .and_then(|mut terminal| {
            let mut app = app::App::new(source, keyword);
            let outcome = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            outcome
        });

    // Always restore the terminal, even when the app failed
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);

    log::info!(target: "TUI", "terminal UI closed");
    result
}
