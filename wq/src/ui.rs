use crate::app::App;
use libwhois_lookup::{
    view::{error_banner, results_view, show_clear, submit_control, ResultsView, Row},
    LookupMode, LookupState,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, Wrap},
    Frame,
};

const FEATURES: [(&str, &str); 3] = [
    (
        "Lightning Fast",
        "Get instant domain information in seconds with our optimized infrastructure",
    ),
    (
        "100% Accurate",
        "Real-time data directly from authoritative registrars and databases",
    ),
    (
        "Comprehensive",
        "Complete domain details including registration, contact, and technical information",
    ),
];

pub fn ui(f: &mut Frame, app: &App, state: &LookupState) {
    let banner = error_banner(state);
    let has_toast = app.toast_message.is_some();

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(5),
    ];
    if banner.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    if has_toast {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut chunk_idx = 0;
    let mut next = || {
        let c = chunks[chunk_idx];
        chunk_idx += 1;
        c
    };

    render_header(f, next());
    render_hero(f, next());
    render_form(f, app, state, next());

    if let Some(message) = banner {
        let alert = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Error"),
            );
        f.render_widget(alert, next());
    }

    render_results(f, state, next());

    if has_toast {
        let chunk = next();
        if let Some((msg, _)) = &app.toast_message {
            let toast = Paragraph::new(Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(msg.as_str(), Style::default().fg(Color::White)),
            ]));
            f.render_widget(toast, chunk);
        }
    }

    let help = Paragraph::new(
        "Enter: Search | Tab: Type | Ctrl+X: Clear | Ctrl+Y: Copy | Ctrl+U: Erase | Esc: Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, next());
}

fn render_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" ◍ ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::styled("WHOIS Checker", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("    "),
        Span::styled("Home   Features   About   ", Style::default().fg(Color::Gray)),
        Span::styled("[API Access]", Style::default().fg(Color::Blue)),
    ]);
    f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)), area);
}

fn render_hero(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "WHOIS Domain Checker",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Domain registration information, ownership details, and technical data for any domain name.",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_form(f: &mut Frame, app: &App, state: &LookupState, area: Rect) {
    let control = submit_control(state);

    let mode_span = |mode: LookupMode| {
        let style = if mode == app.mode {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", mode.label()), style)
    };

    let submit = if control.busy {
        Span::styled(
            format!("[ {} {} ]", app.spinner_frame(), control.label),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("[ {} ]", control.label),
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    };

    let mut buttons = vec![submit];
    if show_clear(state) {
        buttons.push(Span::raw("  "));
        buttons.push(Span::styled("[ Clear Results ]", Style::default().fg(Color::Gray)));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("Domain Name:      ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}_", app.input), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Information Type: ", Style::default().fg(Color::Gray)),
            mode_span(LookupMode::Domain),
            mode_span(LookupMode::Contact),
        ]),
        Line::from(buttons),
    ];

    let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Lookup"));
    f.render_widget(form, area);
}

fn record_table<'a>(title: &'a str, rows: &[Row<'a>], accent: Color) -> Table<'a> {
    let rows: Vec<TableRow> = rows
        .iter()
        .map(|(label, value)| {
            TableRow::new(vec![
                Cell::from(*label).style(Style::default().fg(Color::Gray)),
                Cell::from(*value),
            ])
        })
        .collect();

    Table::new(rows, [Constraint::Length(28), Constraint::Min(8)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(title, Style::default().fg(accent).add_modifier(Modifier::BOLD))),
    )
}

fn centered(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(area)[1]
}

fn render_results(f: &mut Frame, state: &LookupState, area: Rect) {
    match results_view(state) {
        ResultsView::SideBySide { domain, contact } => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            let domain_rows = domain.rows();
            let contact_rows = contact.rows();
            f.render_widget(
                record_table(LookupMode::Domain.label(), &domain_rows, Color::Blue),
                halves[0],
            );
            f.render_widget(
                record_table(LookupMode::Contact.label(), &contact_rows, Color::Green),
                halves[1],
            );
        }
        ResultsView::DomainOnly(domain) => {
            let rows = domain.rows();
            f.render_widget(
                record_table(LookupMode::Domain.label(), &rows, Color::Blue),
                centered(area),
            );
        }
        ResultsView::ContactOnly(contact) => {
            let rows = contact.rows();
            f.render_widget(
                record_table(LookupMode::Contact.label(), &rows, Color::Green),
                centered(area),
            );
        }
        ResultsView::Landing => render_features(f, area),
        ResultsView::Nothing => {}
    }
}

fn render_features(f: &mut Frame, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Why Choose Our WHOIS Checker?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get the most accurate and comprehensive domain information available",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, sections[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(sections[1]);

    for ((title, body), area) in FEATURES.iter().zip(cards.iter()) {
        let card = Paragraph::new(*body)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(*title));
        f.render_widget(card, *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libwhois_lookup::{ContactRecord, DomainRecord, LookupConfig, LookupCoordinator};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let coordinator = LookupCoordinator::new(&LookupConfig::default()).unwrap();
        App::new(coordinator, None, LookupMode::Domain)
    }

    fn draw(state: &LookupState) -> String {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui(f, &app, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn amazon() -> DomainRecord {
        DomainRecord {
            domain_name: Some("amazon.com".into()),
            registrar: Some("MarkMonitor".into()),
            registration_date: Some("1994-11-01".into()),
            expiration_date: Some("2024-10-31".into()),
            estimated_age: Some("30 years".into()),
            hostnames: Some("ns1.amazon.com".into()),
        }
    }

    #[test]
    fn empty_state_shows_feature_cards() {
        let screen = draw(&LookupState::default());
        assert!(screen.contains("Why Choose Our WHOIS Checker?"));
        assert!(screen.contains("Lightning Fast"));
        assert!(screen.contains("[ Search Domain ]"));
        assert!(!screen.contains("Clear Results"));
    }

    #[test]
    fn domain_record_renders_verbatim() {
        let state = LookupState {
            domain_record: Some(amazon()),
            ..Default::default()
        };
        let screen = draw(&state);
        for value in ["amazon.com", "MarkMonitor", "1994-11-01", "2024-10-31", "30 years", "ns1.amazon.com"] {
            assert!(screen.contains(value), "missing {value}");
        }
        assert!(!screen.contains("N/A"));
        assert!(!screen.contains("Why Choose"));
        assert!(screen.contains("Clear Results"));
    }

    #[test]
    fn empty_contact_field_renders_placeholder() {
        let state = LookupState {
            contact_record: Some(ContactRecord {
                registrant_name: Some(String::new()),
                technical_contact_name: Some("Tech".into()),
                administrative_contact_name: Some("Admin".into()),
                contact_email: Some("admin@example.com".into()),
            }),
            ..Default::default()
        };
        let screen = draw(&state);
        let registrant = screen
            .lines()
            .find(|line| line.contains("Registrant Name"))
            .expect("registrant row");
        assert!(registrant.contains("N/A"));
    }

    #[test]
    fn both_records_render_side_by_side() {
        let state = LookupState {
            domain_record: Some(amazon()),
            contact_record: Some(ContactRecord::default()),
            ..Default::default()
        };
        let screen = draw(&state);
        let titles = screen
            .lines()
            .find(|line| line.contains("Domain Information") && line.contains("Contact Information"));
        assert!(titles.is_some());
    }

    #[test]
    fn error_only_hides_landing() {
        let state = LookupState {
            error: Some("domain not found".into()),
            ..Default::default()
        };
        let screen = draw(&state);
        assert!(screen.contains("domain not found"));
        assert!(!screen.contains("Why Choose"));
    }

    #[test]
    fn loading_shows_busy_submit() {
        let state = LookupState {
            is_loading: true,
            ..Default::default()
        };
        let screen = draw(&state);
        assert!(screen.contains("Searching..."));
        assert!(!screen.contains("Search Domain"));
    }
}
