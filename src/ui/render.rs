use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Section};

use super::forms;
use super::sections::{events, gallery, home, info};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Section tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if app.show_registration_form {
        forms::render_registration_overlay(frame, app);
    }

    if app.show_contact_form {
        forms::render_contact_overlay(frame, app);
    }

    if let Some(ref form) = app.signup_form {
        forms::render_signup_overlay(frame, app, form);
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = "  🛼 LA HARDE - Roller Derby Club";
    let hint = "[i] S'inscrire | [c] Contact";
    // Emoji and accents make byte length wrong; count chars.
    let title_width = title.chars().count();
    let hint_width = hint.chars().count();

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize).saturating_sub(title_width + hint_width + 4),
        )),
        Span::styled(hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, section) in Section::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("[{}] {}", i + 1, section.title());
        if *section == app.section {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.section {
        Section::Accueil => home::render(frame, app, area),
        Section::Club => info::render_club(frame, area),
        Section::RollerDerby => info::render_derby(frame, area),
        Section::Evenements => events::render(frame, app, area),
        Section::Galerie => gallery::render(frame, app, area),
        Section::Contact => info::render_contact(frame, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = if app.overlay_open() {
        "[Tab] Champ suivant | [Entrée] Valider | [Esc] Annuler"
    } else {
        "[Tab] Sections | [r] Actualiser | [q] Quitter"
    };

    let (left_text, left_style) = if app.submitting {
        (" Envoi en cours...".to_string(), styles::highlight_style())
    } else if let Some(ref message) = app.status_message {
        let style = if message.starts_with('❌') {
            styles::error_style()
        } else {
            styles::success_style()
        };
        (format!(" {message}"), style)
    } else {
        (String::new(), styles::muted_style())
    };

    let right_text = format!(" {shortcuts} ");
    let padding = (area.width as usize)
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());

    let status_line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
