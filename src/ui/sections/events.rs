use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::format::format_date_short;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_event_list(frame, app, chunks[0]);
    render_event_detail(frame, app, chunks[1]);
}

fn render_event_list(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Événements à venir ({}) ", app.events.len());

    if app.events.is_empty() {
        let block = Block::default()
            .title(title)
            .title_style(styles::muted_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(true));
        let empty = Paragraph::new(Line::from(Span::styled(
            "  Aucun événement à venir",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new([Cell::from(""), Cell::from("Titre"), Cell::from("Date")])
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = app
        .events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let style = if i == app.event_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            Row::new(vec![
                Cell::from(event.event_type.icon()),
                Cell::from(event.title.as_str()),
                Cell::from(format_date_short(&event.date)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.event_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_event_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Détails ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    let content = match app.selected_event() {
        Some(event) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::raw(format!(" {} ", event.event_type.icon())),
                    Span::styled(&event.title, styles::title_style()),
                ]),
                Line::from(Span::styled(
                    format!("   {}", event.event_type.label()),
                    styles::muted_style(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled(" 📅 ", styles::highlight_style()),
                    Span::raw(event.formatted_date()),
                ]),
                Line::from(vec![
                    Span::styled(" 🕐 ", styles::highlight_style()),
                    Span::raw(event.time.as_str()),
                ]),
                Line::from(vec![
                    Span::styled(" 📍 ", styles::highlight_style()),
                    Span::raw(event.location.as_str()),
                ]),
            ];

            if let Some(capacity) = event.max_capacity {
                lines.push(Line::from(vec![
                    Span::styled(" 👥 ", styles::highlight_style()),
                    Span::raw(format!("{capacity} places max")),
                ]));
            }

            if let Some(ref price) = event.price {
                lines.push(Line::from(vec![
                    Span::styled(" 💰 ", styles::highlight_style()),
                    Span::raw(price.as_str()),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::raw(format!(" {}", event.description))));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(" [Entrée] ", styles::help_key_style()),
                Span::styled("S'inscrire à cet événement", styles::help_desc_style()),
            ]));

            lines
        }
        None => vec![Line::from(Span::styled(
            "  Sélectionnez un événement",
            styles::muted_style(),
        ))],
    };

    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
