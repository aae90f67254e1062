pub mod activity_log;
pub mod header;
pub mod help;
pub mod landing;
pub mod metrics_grid;
pub mod statusbar;
pub mod theme;
pub mod usage_chart;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, key_label};
use crate::ui::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], &app.wallet, &app.theme);

    if app.is_dashboard_mounted() {
        draw_dashboard(frame, chunks[1], app);
    } else {
        landing::render(
            frame,
            chunks[1],
            &key_label(app.keybinds.connect),
            &app.theme,
        );
    }

    statusbar::render(
        frame,
        chunks[2],
        &app.keybinds,
        app.is_dashboard_mounted(),
        app.status_message.as_ref(),
        &app.theme,
    );

    // Help overlay goes last so it sits on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(5),
        ])
        .split(area);

    render_overview(frame, chunks[0], &app.theme);
    metrics_grid::render(frame, chunks[1], &app.dashboard.metrics(), &app.theme);
    usage_chart::render(
        frame,
        chunks[2],
        app.chart.window(),
        app.chart.period(),
        &app.theme,
    );
    activity_log::render(
        frame,
        chunks[3],
        &activity_log::RECENT_ACTIVITY,
        &app.theme,
    );
}

fn render_overview(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            " Dashboard Overview",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Real-time metrics from your registered infernet nodes.",
            Style::default().fg(theme.text_secondary),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
