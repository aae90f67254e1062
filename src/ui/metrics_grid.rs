use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::format::truncate_unicode;
use crate::telemetry::descriptors::{Icon, MetricDescriptor};
use crate::ui::theme::Theme;

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Server => "\u{25a3}",
        Icon::Activity => "\u{223f}",
        Icon::Cpu => "\u{25c8}",
        Icon::Wallet => "\u{25ce}",
    }
}

/// One card per metric, laid out left to right in list order.
pub fn render(frame: &mut Frame, area: Rect, metrics: &[MetricDescriptor], theme: &Theme) {
    if metrics.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (metric, card) in metrics.iter().zip(cards.iter()) {
        render_card(frame, *card, metric, theme);
    }
}

fn render_card(frame: &mut Frame, area: Rect, metric: &MetricDescriptor, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let accent = theme.tone(metric.tone);
    let heading = format!("{} {}", icon_glyph(metric.icon), metric.name);

    let lines = vec![
        Line::from(Span::styled(
            truncate_unicode(&heading, width),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(Span::styled(
            truncate_unicode(&metric.value, width),
            Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_unicode(&metric.status, width),
            Style::default().fg(theme.tone(metric.status_tone)),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
