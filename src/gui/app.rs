//! Desktop window: keyword field, Search button, error line and results table

use crate::client::TrendsSource;
use crate::gui::colors;
use crate::render::{TableRow, HEADERS};
use crate::view::{SearchOutcome, SearchView};
use crate::worker::SearchWorker;
use eframe::egui;
use std::sync::Arc;

/// Main application state
pub struct ExplorerApp {
    view: SearchView,
    /// Text field contents; mirrored into `view` on every edit
    keyword_input: String,
    /// Rows derived from the view, rebuilt whenever a search settles
    rows: Vec<TableRow>,
    worker: SearchWorker,
    /// First frame flag (for auto-focus)
    first_frame: bool,
}

impl ExplorerApp {
    pub fn new(source: Arc<dyn TrendsSource>, keyword: &str) -> Self {
        let mut view = SearchView::new();
        view.set_keyword(keyword);

        Self {
            view,
            keyword_input: keyword.to_string(),
            rows: Vec::new(),
            worker: SearchWorker::new(source),
            first_frame: true,
        }
    }

    fn start_search(&mut self, ctx: &egui::Context) {
        let keyword = self.view.keyword().to_string();
        log::info!(target: "GUI", "search requested for {:?}", keyword);
        let ctx = ctx.clone();
        self.worker.spawn(keyword, move || ctx.request_repaint());
    }

    fn process_messages(&mut self) {
        if self.worker.process_messages(&mut self.view) > 0 {
            self.rows = self.view.rows();
        }
    }

    /// Render search bar
    fn render_search_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Research Topic Explorer");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.keyword_input)
                        .desired_width(ui.available_width() - 90.0)
                        .hint_text("Enter research topic (e.g., javascript)"),
                );

                if self.first_frame {
                    response.request_focus();
                    self.first_frame = false;
                }

                if response.changed() {
                    self.view.set_keyword(self.keyword_input.as_str());
                }

                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Search").clicked() || submitted {
                    self.start_search(ctx);
                }
            });
            ui.add_space(6.0);
        });
    }

    /// Render status bar
    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.worker.in_flight() > 0 {
                    ui.spinner();
                    ui.label("Searching...");
                } else if let Some(data) = self.view.data() {
                    ui.label(format!(
                        "{} shown of {} results",
                        self.rows.len(),
                        data.results.len()
                    ));
                } else {
                    ui.label("Ready");
                }
            });
        });
    }

    fn render_terms(&self, ctx: &egui::Context) {
        let Some(data) = self.view.data() else {
            return;
        };
        if data.terms.is_empty() {
            return;
        }

        egui::SidePanel::right("terms")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.strong("Top terms");
                ui.separator();
                egui::Grid::new("terms_grid").striped(true).show(ui, |ui| {
                    for t in &data.terms {
                        ui.label(&t.term);
                        ui.label(t.count.to_string());
                        ui.end_row();
                    }
                });
            });
    }

    /// Render the results table with virtual scrolling
    fn render_results_table(&self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let available_height = ui.available_height();
        ui.heading("Search Results");

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::initial(110.0).at_least(20.0).clip(true))
            .column(Column::initial(180.0).at_least(20.0).clip(true))
            .column(Column::initial(180.0).at_least(20.0).clip(true))
            .min_scrolled_height(0.0)
            .max_scroll_height(available_height)
            .header(20.0, |mut header| {
                for name in HEADERS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, self.rows.len(), |mut row| {
                    let Some(data) = self.rows.get(row.index()) else {
                        return;
                    };
                    row.col(|ui| {
                        ui.add(
                            egui::Hyperlink::from_label_and_url(&data.title, &data.link)
                                .open_in_new_tab(true),
                        );
                    });
                    row.col(|ui| {
                        ui.label(&data.date);
                    });
                    row.col(|ui| {
                        ui.label(&data.author);
                    });
                    row.col(|ui| {
                        ui.colored_label(colors::color_for_source(&data.source), &data.source);
                    });
                });
            });
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        self.render_search_bar(ctx);
        self.render_status_bar(ctx);
        self.render_terms(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.view.outcome() {
            SearchOutcome::Idle => {}
            SearchOutcome::Failure(message) => {
                ui.colored_label(colors::ERROR, format!("Error: {}", message));
            }
            SearchOutcome::Success(_) => self.render_results_table(ui),
        });
    }
}
