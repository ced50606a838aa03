//! Profile 弹窗组件
//!
//! 原样展示 /profile 返回的 JSON 载荷，不做字段投影。

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染 Profile 弹窗
pub fn render(frame: &mut Frame, payload: &str, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 72u16.min(area.width.saturating_sub(4));
    let popup_height = 14u16.min(area.height.saturating_sub(2));

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = payload
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(colors.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/Esc close",
        Style::default().fg(colors.muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Profile ")
        .title_style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(colors.bg));

    frame.render_widget(paragraph, popup_area);
}
