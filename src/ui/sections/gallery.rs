use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::models::{GalleryFilter, PhotoCategory};
use crate::ui::styles;
use crate::utils::format::format_date_short;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filter_bar(frame, app, chunks[0]);
    render_photo_list(frame, app, chunks[1]);
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let filters = std::iter::once(GalleryFilter::All)
        .chain(PhotoCategory::ALL.iter().map(|c| GalleryFilter::Category(*c)));

    let mut spans = vec![Span::styled(" ←  ", styles::muted_style())];
    for (i, filter) in filters.enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        if filter == app.gallery_filter {
            spans.push(Span::styled(filter.label(), styles::tab_style(true)));
        } else {
            spans.push(Span::styled(filter.label(), styles::muted_style()));
        }
    }
    spans.push(Span::styled("  → ", styles::muted_style()));

    let block = Block::default()
        .title(" Catégories ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_photo_list(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_photos();
    let title = format!(" Galerie Photos ({}) ", visible.len());

    let block = Block::default()
        .title(title)
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  Aucune photo dans cette catégorie",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new([Cell::from("Titre"), Cell::from("Catégorie"), Cell::from("Date")])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|photo| {
            let date = photo
                .taken_on
                .as_deref()
                .map(format_date_short)
                .unwrap_or_else(|| "-".to_string());

            Row::new(vec![
                Cell::from(photo.title.as_str()),
                Cell::from(photo.category.label()),
                Cell::from(date),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
