use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::format::format_period;
use crate::telemetry::descriptors::Tone;
use crate::telemetry::window::RollingWindow;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    window: &RollingWindow,
    period: Duration,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Real-time Node Performance ",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    render_caption(frame, chunks[0], period, theme);

    let cpu: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.cpu)))
        .collect();
    let memory: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.memory)))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("cpu")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.chart_cpu))
            .data(&cpu),
        Dataset::default()
            .name("memory")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.chart_memory))
            .data(&memory),
    ];

    let axis_style = Style::default().fg(theme.chart_axis);
    let x_max = window.capacity().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<String> = match (window.oldest(), window.latest()) {
        (Some(first), Some(last)) => vec![first.time.to_string(), last.time.to_string()],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, 100.0])
                .labels(["0%", "50%", "100%"]),
        );

    frame.render_widget(chart, chunks[1]);
}

fn render_caption(frame: &mut Frame, area: Rect, period: Duration, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("\u{25cf} Live Feed {}", format_period(period.as_millis())),
            Style::default().fg(theme.tone(Tone::Emerald)),
        ),
        Span::raw("  "),
        Span::styled(
            "Live telemetry from Ritual compute nodes",
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
