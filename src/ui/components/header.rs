use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染顶部标题栏（应用名 + API origin）
pub fn render(frame: &mut Frame, area: Rect, server_url: &str, colors: &ThemeColors) {
    let line = Line::from(vec![
        Span::styled(
            " taskdeck",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ·  ", Style::default().fg(colors.muted)),
        Span::styled(server_url.to_string(), Style::default().fg(colors.muted)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
