use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Hero
            Constraint::Length(5), // Stats
            Constraint::Min(5),    // Training schedule
        ])
        .split(area);

    render_hero(frame, chunks[0]);
    render_stats(frame, app, chunks[1]);
    render_schedule(frame, chunks[2]);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Rejoignez La Harde !",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::raw(
            "  Découvrez le roller derby, un sport d'équipe spectaculaire qui combine",
        )),
        Line::from(Span::raw(
            "  vitesse, stratégie et esprit d'équipe. Que vous soyez débutant(e) ou",
        )),
        Line::from(Span::raw(
            "  expérimenté(e), venez glisser avec nous !",
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let counters = [
        (format!("{}+", app.stats.active_members), "Membres actifs"),
        ("3".to_string(), "Entraînements/semaine"),
        (app.stats.upcoming_events.to_string(), "Événements à venir"),
        (app.stats.total_photos.to_string(), "Photos en galerie"),
    ];

    for (column, (value, label)) in columns.iter().zip(counters) {
        let lines = vec![
            Line::from(Span::styled(
                format!("  {value}"),
                styles::heading_style(),
            )),
            Line::from(Span::styled(format!("  {label}"), styles::muted_style())),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(false));
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn render_schedule(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Mardi 19h30 - 21h30   ", styles::highlight_style()),
            Span::raw("Entraînement technique - Gymnase Municipal"),
        ]),
        Line::from(vec![
            Span::styled("  Jeudi 20h00 - 22h00   ", styles::highlight_style()),
            Span::raw("Entraînement tactique - Gymnase Municipal"),
        ]),
        Line::from(vec![
            Span::styled("  Samedi 14h00 - 16h00  ", styles::highlight_style()),
            Span::raw("Séance débutants + jeux - Gymnase Municipal"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Première séance gratuite ! ", styles::heading_style()),
            Span::styled(
                "Nous prêtons tout l'équipement nécessaire.",
                styles::muted_style(),
            ),
        ]),
    ];

    let block = Block::default()
        .title(" Planning Hebdomadaire ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
