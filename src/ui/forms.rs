//! Modal form overlays, rendered on top of the active section.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, ContactField, EventSignupForm, RegistrationField, SignupField};
use crate::utils::format::truncate_string;

use super::render::centered_rect_fixed;
use super::styles;

const FIELD_WIDTH: usize = 28;

/// One "Label: [value▌]" line; the focused field shows a cursor and the
/// selection background.
fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if focused { "▌" } else { "" };
    let display = format!("{:<width$}", truncate_string(value, FIELD_WIDTH), width = FIELD_WIDTH);

    Line::from(vec![
        Span::styled(format!("  {label:<12}["), styles::muted_style()),
        Span::styled(format!("{display}{cursor}"), style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn choice_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let display = if focused {
        format!("◀ {value} ▶")
    } else {
        value.to_string()
    };

    Line::from(vec![
        Span::styled(format!("  {label:<12}"), styles::muted_style()),
        Span::styled(display, style),
    ])
}

fn submit_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    if focused {
        Line::from(vec![
            Span::raw("           ["),
            Span::styled(format!(" ▶ {label} ◀ "), style),
            Span::raw("]"),
        ])
    } else {
        Line::from(vec![
            Span::raw("           ["),
            Span::styled(format!("   {label}   "), style),
            Span::raw("]"),
        ])
    }
}

fn footer_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("  [Tab] ", styles::help_key_style()),
        Span::styled("Champ suivant  ", styles::muted_style()),
        Span::styled("[Esc] ", styles::help_key_style()),
        Span::styled("Annuler", styles::muted_style()),
    ])
}

pub fn render_registration_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 16, frame.area());
    frame.render_widget(Clear, area);

    let draft = &app.registration_draft;
    let focus = app.registration_focus;

    let lines = vec![
        Line::from(""),
        field_line("Prénom *", &draft.first_name, focus == RegistrationField::FirstName),
        field_line("Nom *", &draft.last_name, focus == RegistrationField::LastName),
        field_line("Email *", &draft.email, focus == RegistrationField::Email),
        field_line("Téléphone *", &draft.phone, focus == RegistrationField::Phone),
        field_line("Âge *", &draft.age, focus == RegistrationField::Age),
        choice_line("Niveau", draft.level.label(), focus == RegistrationField::Level),
        field_line("Message", &draft.note, focus == RegistrationField::Note),
        Line::from(""),
        submit_line("Envoyer ma demande", focus == RegistrationField::Submit),
        Line::from(""),
        footer_line(),
    ];

    let block = Block::default()
        .title(" 🛼 Rejoindre La Harde ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_contact_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 13, frame.area());
    frame.render_widget(Clear, area);

    let draft = &app.contact_draft;
    let focus = app.contact_focus;

    let lines = vec![
        Line::from(""),
        field_line("Nom *", &draft.name, focus == ContactField::Name),
        field_line("Email *", &draft.email, focus == ContactField::Email),
        field_line("Sujet *", &draft.subject, focus == ContactField::Subject),
        field_line("Message *", &draft.message, focus == ContactField::Message),
        Line::from(""),
        submit_line("Envoyer le message", focus == ContactField::Submit),
        Line::from(""),
        footer_line(),
    ];

    let block = Block::default()
        .title(" ✉ Nous contacter ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_signup_overlay(frame: &mut Frame, _app: &App, form: &EventSignupForm) {
    let area = centered_rect_fixed(50, 13, frame.area());
    frame.render_widget(Clear, area);

    let signup = &form.signup;
    let focus = form.focus;

    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", truncate_string(&signup.event_title, 44)),
            styles::heading_style(),
        )),
        Line::from(""),
        field_line("Nom *", &signup.name, focus == SignupField::Name),
        field_line("Email *", &signup.email, focus == SignupField::Email),
        field_line("Téléphone *", &signup.phone, focus == SignupField::Phone),
        Line::from(""),
        submit_line("Confirmer l'inscription", focus == SignupField::Submit),
        Line::from(""),
        footer_line(),
    ];

    let block = Block::default()
        .title(" 📅 Inscription à l'événement ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
