use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::telemetry::descriptors::Tone;
use crate::ui::theme::Theme;

/// Shown while no wallet is connected; the dashboard is not mounted.
pub fn render(frame: &mut Frame, area: Rect, connect_key: &str, theme: &Theme) {
    let [body] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Monitor your ",
                Style::default()
                    .fg(theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "AI Infrastructure",
                Style::default()
                    .fg(theme.tone(Tone::Emerald))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Decentralized compute monitoring for the Ritual chain. Track uptime, latency, and rewards in real-time.",
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!(" {connect_key} "),
                Style::default()
                    .fg(theme.pill_key_fg)
                    .bg(theme.pill_key_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Connect Wallet", Style::default().fg(theme.pill_desc_fg)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}
