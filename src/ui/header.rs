use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::WalletState;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, wallet: &WalletState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            " A ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Aegis",
            Style::default()
                .fg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let pill_style = if wallet.is_connected() {
        Style::default()
            .fg(theme.pill_key_fg)
            .bg(theme.pill_key_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_secondary).bg(theme.surface_bg)
    };
    let pill = Line::from(Span::styled(format!(" {} ", wallet.label()), pill_style))
        .right_aligned();
    frame.render_widget(Paragraph::new(pill), chunks[1]);
}
