pub mod app;
pub mod colors;

use crate::client::TrendsSource;
use std::sync::Arc;

/// Entry point: launch the native GUI window
pub fn run(source: Arc<dyn TrendsSource>, keyword: &str) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Research Topic Explorer")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let keyword = keyword.to_string();
    log::info!(target: "GUI", "starting desktop window");

    eframe::run_native(
        "Research Topic Explorer",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app::ExplorerApp::new(source, &keyword)))),
    )
    .map_err(|e| crate::ExplorerError::Gui(e.to_string()))
}
