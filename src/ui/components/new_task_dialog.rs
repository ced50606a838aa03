//! New Task 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染 New Task 弹窗
pub fn render(frame: &mut Frame, input: &str, submitting: bool, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 60u16.min(area.width.saturating_sub(4));
    let popup_height = 7u16;

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 输入行（带光标）
    let cursor = if submitting { "" } else { "▎" };
    let input_line = Line::from(vec![
        Span::styled(
            input.to_string(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(colors.highlight)),
    ]);

    // 提示行
    let hint = if submitting {
        "Creating..."
    } else {
        "Enter create · Esc cancel"
    };

    let lines = vec![
        Line::from(Span::styled("Title", Style::default().fg(colors.muted))),
        input_line,
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(colors.muted))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" New Task ")
        .title_style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors.bg));

    frame.render_widget(paragraph, popup_area);
}
