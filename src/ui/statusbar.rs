use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{ResolvedKeybinds, StatusKind, StatusMessage, key_label};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    keybinds: &ResolvedKeybinds,
    connected: bool,
    status_message: Option<&StatusMessage>,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    // Status message takes priority
    if let Some(status) = status_message {
        let color = match status.kind {
            StatusKind::Ok => theme.status_ok,
            StatusKind::Warn => theme.status_err,
        };
        let line = Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let mut spans = Vec::new();
    spans.extend(pill_spans(key_label(keybinds.quit), "Quit", theme));
    if connected {
        spans.extend(pill_spans(key_label(keybinds.connect), "Disconnect", theme));
        spans.extend(pill_spans(key_label(keybinds.faster), "Faster", theme));
        spans.extend(pill_spans(key_label(keybinds.slower), "Slower", theme));
        spans.extend(pill_spans(key_label(keybinds.refresh), "Tick", theme));
    } else {
        spans.extend(pill_spans(key_label(keybinds.connect), "Connect", theme));
    }
    spans.extend(pill_spans(key_label(keybinds.cycle_theme), "Theme", theme));
    spans.extend(pill_spans(key_label(keybinds.help), "Help", theme));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn pill_spans<'a>(key: String, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
