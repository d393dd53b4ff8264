use ratatui::style::Color;

/// Colour for a result's source column, keyed on the well-known hosts the
/// trends server aggregates.
pub fn color_for_source(source: &str) -> Color {
    let source = source.to_ascii_lowercase();
    if source.contains("arxiv") {
        Color::Red
    } else if source.contains("pubmed") || source.contains("ncbi") {
        Color::LightBlue
    } else if source.contains("semanticscholar") {
        Color::Yellow
    } else if source.contains("dblp") {
        Color::Green
    } else if source.contains("scholar.google") {
        Color::Cyan
    } else if source.contains("ssrn") {
        Color::Magenta
    } else if source.contains("researchgate") {
        Color::LightGreen
    } else if source.contains("core.ac.uk") {
        Color::LightYellow
    } else {
        Color::Gray
    }
}

/// Colour for a date or author cell; placeholders are dimmed.
pub fn color_for_cell(text: &str) -> Color {
    if text == crate::render::MISSING_CELL {
        Color::DarkGray
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hosts_get_their_colour() {
        assert_eq!(color_for_source("https://arxiv.org"), Color::Red);
        assert_eq!(color_for_source("https://PubMed.ncbi.nlm.nih.gov"), Color::LightBlue);
        assert_eq!(color_for_source("somewhere else"), Color::Gray);
    }

    #[test]
    fn placeholders_are_dimmed() {
        assert_eq!(color_for_cell("-"), Color::DarkGray);
        assert_eq!(color_for_cell("2024"), Color::White);
    }
}
