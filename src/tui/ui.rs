use crate::model::TermCount;
use crate::render::{truncate_to_width, HEADERS};
use crate::tui::app::App;
use crate::tui::colors;
use crate::view::SearchOutcome;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

/// Width of the top-terms side panel
const TERMS_PANEL_WIDTH: u16 = 28;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Outcome
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);

    match app.view.outcome().clone() {
        SearchOutcome::Idle => {}
        SearchOutcome::Failure(message) => draw_error(frame, &message, chunks[2]),
        SearchOutcome::Success(result) => {
            if result.terms.is_empty() || chunks[2].width < TERMS_PANEL_WIDTH * 3 {
                draw_table(frame, app, chunks[2]);
            } else {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(20), Constraint::Length(TERMS_PANEL_WIDTH)])
                    .split(chunks[2]);
                draw_table(frame, app, body[0]);
                draw_terms(frame, &result.terms, body[1]);
            }
        }
    }

    draw_status_bar(frame, app, chunks[3]);

    if app.input.focused {
        // Border (1) + leading space (1)
        let cursor_x = chunks[1].x + 2 + app.input.cursor_column() as u16;
        let cursor_y = chunks[1].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(" Research Topic Explorer").style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(40, 40, 50))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Keyword ")
        .title_bottom(Line::from(" Enter: Search ").right_aligned());

    let text = if app.input.text.is_empty() && app.input.focused {
        Line::from(Span::styled(
            " Enter research topic (e.g., javascript)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!(" {}", app.input.text))
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_error(frame: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(format!(" Error: {}", message))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    // Block title (1) + header (1)
    let table_inner_height = area.height.saturating_sub(2) as usize;
    app.table.visible_rows = table_inner_height;

    let header = Row::new(HEADERS.iter().map(|name| {
        Cell::from(*name).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 95, 135))
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    // Fixed columns for date/author/source, title takes the rest
    let date_w: u16 = 14;
    let author_w: u16 = (area.width / 5).clamp(8, 30);
    let source_w: u16 = (area.width / 5).clamp(8, 32);
    let title_w = area
        .width
        .saturating_sub(date_w + author_w + source_w + 3)
        .max(10) as usize;

    let start = app.table.scroll_offset;
    let end = (start + table_inner_height).min(app.rows.len());

    let rows: Vec<Row> = (start..end)
        .enumerate()
        .map(|(visual_idx, logical_idx)| {
            let row = &app.rows[logical_idx];
            let is_selected = app.table.selected == Some(logical_idx);

            // Alternating row background
            let bg = if is_selected {
                Color::Rgb(60, 60, 80)
            } else if visual_idx % 2 == 1 {
                Color::Rgb(25, 25, 35)
            } else {
                Color::Reset
            };

            let fg_modifier = if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            let title_cell = Cell::from(truncate_to_width(&row.title, title_w)).style(
                Style::default()
                    .fg(Color::LightBlue)
                    .bg(bg)
                    .add_modifier(Modifier::UNDERLINED | fg_modifier),
            );
            let date_cell = Cell::from(truncate_to_width(&row.date, date_w as usize))
                .style(Style::default().fg(colors::color_for_cell(&row.date)).bg(bg));
            let author_cell = Cell::from(truncate_to_width(&row.author, author_w as usize))
                .style(Style::default().fg(colors::color_for_cell(&row.author)).bg(bg));
            let source_cell = Cell::from(truncate_to_width(&row.source, source_w as usize))
                .style(Style::default().fg(colors::color_for_source(&row.source)).bg(bg));

            Row::new(vec![title_cell, date_cell, author_cell, source_cell])
        })
        .collect();

    let widths = [
        Constraint::Fill(1),
        Constraint::Length(date_w),
        Constraint::Length(author_w),
        Constraint::Length(source_w),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE).title(" Search Results "));

    frame.render_widget(table, area);
}

fn draw_terms(frame: &mut Frame, terms: &[TermCount], area: Rect) {
    let lines: Vec<Line> = terms
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled(format!(" {:>4} ", t.count), Style::default().fg(Color::Green)),
                Span::raw(t.term.clone()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Top terms "),
    );
    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.is_searching() {
        format!(" \u{23F3} {}", app.status_message)
    } else {
        match app.last_settled {
            Some(at) => format!(" {} | {}", app.status_message, at.format("%H:%M:%S")),
            None => format!(" {}", app.status_message),
        }
    };

    let right_text = if app.input.focused {
        " Enter:Search  Tab:Results  Esc:Clear  Ctrl+C:Quit "
    } else {
        " Enter/o:Open  y:Copy link  \u{2191}\u{2193}:Move  Tab:Keyword  Esc:Quit "
    };

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = unicode_width::UnicodeWidthStr::width(left_text.as_str());
    let right_len = right_text.chars().count();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_body;
    use crate::worker::test_support::FnSource;
    use crate::error::ExplorerError;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn idle_app() -> App {
        let source = Arc::new(FnSource::new(|_: &str| Err(ExplorerError::HttpStatus(500))));
        App::new(source, "")
    }

    #[test]
    fn idle_shows_only_input() {
        let mut app = idle_app();
        let text = screen(&mut app);
        assert!(text.contains("Research Topic Explorer"));
        assert!(text.contains("Enter research topic"));
        assert!(!text.contains("Error:"));
        assert!(!text.contains("Search Results"));
    }

    #[test]
    fn failure_shows_error_line() {
        let mut app = idle_app();
        app.view.apply(Err(ExplorerError::HttpStatus(500)));
        let text = screen(&mut app);
        assert!(text.contains("Error: HTTP error! status: 500"));
        assert!(!text.contains("Search Results"));
    }

    #[test]
    fn success_shows_filtered_rows_and_terms() {
        let mut app = idle_app();
        app.view.apply(parse_body(
            r##"{"results":[
                {"title":"Visible paper","date":"N/A","author":"N/A","source":"https://arxiv.org","link":"http://x"},
                {"title":"Hidden paper","date":"2024","author":"A","source":"S","link":"#"}
            ],"terms":{"visible":1}}"##,
        ));
        app.rows = app.view.rows();
        let text = screen(&mut app);

        assert!(text.contains("Search Results"));
        assert!(text.contains("Visible paper"));
        assert!(!text.contains("Hidden paper"));
        assert!(text.contains("https://arxiv.org"));
        assert!(text.contains("Top terms"));
        assert!(!text.contains("Error:"));
    }
}
