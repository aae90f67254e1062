use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::telemetry::descriptors::Tone;
use crate::ui::theme::Theme;

pub struct LogEntry {
    pub time: &'static str,
    pub message: &'static str,
    pub tone: Tone,
}

pub const RECENT_ACTIVITY: [LogEntry; 3] = [
    LogEntry {
        time: "10:42:12",
        message: "\u{2714} Node-01 completed inference job #8821",
        tone: Tone::Emerald,
    },
    LogEntry {
        time: "10:41:55",
        message: "\u{2139} Node-03 syncing with Ritual Chain block 129402",
        tone: Tone::Blue,
    },
    LogEntry {
        time: "10:40:01",
        message: "\u{2139} Container health check passed",
        tone: Tone::Slate,
    },
];

pub fn render(frame: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Recent Activity Logs ",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ));

    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let color = theme.tone(entry.tone);
            Line::from(vec![
                Span::styled(
                    format!(" [{}] ", entry.time),
                    Style::default().fg(color).add_modifier(Modifier::DIM),
                ),
                Span::styled(entry.message, Style::default().fg(color)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
