use crate::client::TrendsSource;
use crate::render::TableRow;
use crate::tui::input::InputState;
use crate::tui::table::TableState;
use crate::tui::ui;
use crate::view::SearchView;
use crate::worker::SearchWorker;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct App {
    pub view: SearchView,
    /// Rows derived from the view, rebuilt whenever a search settles
    pub rows: Vec<TableRow>,

    // Sub-states
    pub input: InputState,
    pub table: TableState,

    pub status_message: String,
    pub last_settled: Option<DateTime<Local>>,

    worker: SearchWorker,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(source: Arc<dyn TrendsSource>, keyword: &str) -> Self {
        let mut view = SearchView::new();
        view.set_keyword(keyword);

        Self {
            view,
            rows: Vec::new(),
            input: InputState::with_text(keyword),
            table: TableState::default(),
            status_message: "Ready".to_string(),
            last_settled: None,
            worker: SearchWorker::new(source),
            should_quit: false,
        }
    }

    pub fn is_searching(&self) -> bool {
        self.worker.in_flight() > 0
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| crate::ExplorerError::Terminal(e.to_string()))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Start a search for the current keyword. Earlier searches keep running.
    pub fn start_search(&mut self) {
        let keyword = self.view.keyword().to_string();
        log::info!(target: "TUI", "search requested for {:?}", keyword);
        self.status_message = format!("Searching for \"{}\"...", keyword);
        self.worker.spawn(keyword, || {});
    }

    pub fn process_messages(&mut self) {
        if self.worker.process_messages(&mut self.view) == 0 {
            return;
        }

        self.rows = self.view.rows();
        self.table.reset(self.rows.len());
        self.last_settled = Some(Local::now());
        self.status_message = match self.view.data() {
            Some(data) => format!(
                "{} shown of {} results",
                self.rows.len(),
                data.results.len()
            ),
            None => "Search failed".to_string(),
        };
    }

    pub fn selected_row(&self) -> Option<&TableRow> {
        self.table.selected.and_then(|i| self.rows.get(i))
    }

    fn open_selected(&mut self) {
        let Some(link) = self.selected_row().map(|r| r.link.clone()) else {
            return;
        };
        match open::that_detached(&link) {
            Ok(()) => {
                log::info!(target: "TUI", "opened {}", link);
                self.status_message = format!("Opened {}", link);
            }
            Err(e) => {
                log::warn!(target: "TUI", "cannot open {}: {}", link, e);
                self.status_message = format!("Cannot open link: {}", e);
            }
        }
    }

    fn copy_selected(&mut self) {
        let Some(link) = self.selected_row().map(|r| r.link.clone()) else {
            return;
        };
        let copied = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(link.clone()));
        self.status_message = match copied {
            Ok(()) => format!("Copied {}", link),
            Err(e) => format!("Cannot copy link: {}", e),
        };
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.input.focused && !self.input.text.is_empty() {
                    self.input.clear();
                    self.sync_keyword();
                } else if self.input.focused {
                    self.input.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.input.focused {
            self.handle_input_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn sync_keyword(&mut self) {
        self.view.set_keyword(self.input.text.as_str());
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert(c);
                self.sync_keyword();
            }
            KeyCode::Backspace => {
                if self.input.backspace() {
                    self.sync_keyword();
                }
            }
            KeyCode::Delete => {
                if self.input.delete() {
                    self.sync_keyword();
                }
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(),
            KeyCode::Enter => self.start_search(),
            KeyCode::Tab | KeyCode::Down => {
                self.input.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.rows.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('y') => self.copy_selected(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.input.focused = true;
            }

            _ => {}
        }
    }
}
