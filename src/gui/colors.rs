use eframe::egui::Color32;

/// Colour for the error line
pub const ERROR: Color32 = Color32::from_rgb(220, 60, 60);

/// Map a result's source to an egui colour (matches the TUI palette).
pub fn color_for_source(source: &str) -> Color32 {
    let source = source.to_ascii_lowercase();
    if source.contains("arxiv") {
        Color32::from_rgb(255, 80, 80)
    } else if source.contains("pubmed") || source.contains("ncbi") {
        Color32::from_rgb(100, 180, 255)
    } else if source.contains("semanticscholar") {
        Color32::from_rgb(255, 220, 80)
    } else if source.contains("dblp") {
        Color32::from_rgb(80, 200, 80)
    } else if source.contains("scholar.google") {
        Color32::from_rgb(80, 220, 255)
    } else if source.contains("ssrn") {
        Color32::from_rgb(220, 80, 220)
    } else if source.contains("researchgate") {
        Color32::from_rgb(120, 230, 120)
    } else if source.contains("core.ac.uk") {
        Color32::from_rgb(255, 240, 120)
    } else {
        Color32::from_rgb(180, 180, 180)
    }
}
