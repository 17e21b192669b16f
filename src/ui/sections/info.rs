//! Static sections: club presentation, roller derby primer, contact page.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::styles;

pub fn render_club(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Notre Histoire", styles::heading_style())),
        Line::from(""),
        Line::from(Span::raw(
            "  Fondé en 2019, La Harde est un club de roller derby passionné et",
        )),
        Line::from(Span::raw(
            "  inclusif. Nous accueillons tous les niveaux et tous les genres dans",
        )),
        Line::from(Span::raw(
            "  une ambiance conviviale et bienveillante. Notre équipe participe aux",
        )),
        Line::from(Span::raw("  championnats régionaux et nationaux.")),
        Line::from(""),
        Line::from(Span::styled("  Nos Valeurs", styles::heading_style())),
        Line::from(""),
        value_line("Inclusivité", "Tout le monde est le bienvenu"),
        value_line("Respect", "Fair-play et esprit d'équipe"),
        value_line("Progression", "Accompagnement personnalisé"),
        value_line("Plaisir", "Le sport avant tout pour s'amuser"),
    ];

    let block = Block::default()
        .title(" À propos de La Harde ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn value_line(name: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  • {name} : "), styles::highlight_style()),
        Span::raw(description),
    ])
}

pub fn render_derby(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  ⚡ "),
            Span::styled("Sport d'équipe", styles::heading_style()),
        ]),
        Line::from(Span::raw(
            "  Deux équipes de 5 joueuses s'affrontent sur une piste ovale.",
        )),
        Line::from(Span::raw(
            "  L'objectif : marquer des points en dépassant les adversaires.",
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  🛼 "),
            Span::styled("Sur patins à roulettes", styles::heading_style()),
        ]),
        Line::from(Span::raw(
            "  Joué exclusivement sur des patins à roulettes traditionnels (quads),",
        )),
        Line::from(Span::raw(
            "  le roller derby demande agilité et équilibre.",
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("  🏆 "),
            Span::styled("Sport international", styles::heading_style()),
        ]),
        Line::from(Span::raw(
            "  Reconnu mondialement avec des championnats nationaux et",
        )),
        Line::from(Span::raw(
            "  internationaux. Un sport en pleine expansion !",
        )),
    ];

    let block = Block::default()
        .title(" Qu'est-ce que le Roller Derby ? ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

pub fn render_contact(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  📍 Adresse   ", styles::highlight_style()),
            Span::raw("Gymnase Municipal, 123 Rue du Sport, 75000 Paris"),
        ]),
        Line::from(vec![
            Span::styled("  ✉  Email     ", styles::highlight_style()),
            Span::raw("contact@laharde.fr"),
        ]),
        Line::from(vec![
            Span::styled("  📞 Téléphone ", styles::highlight_style()),
            Span::raw("06 12 34 56 78"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [c] ", styles::help_key_style()),
            Span::styled("Envoyer un message", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  [i] ", styles::help_key_style()),
            Span::styled("Demande d'inscription au club", styles::help_desc_style()),
        ]),
    ];

    let block = Block::default()
        .title(" Contact ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
