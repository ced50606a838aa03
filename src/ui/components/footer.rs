use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染反馈区 + 底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    feedback: Option<&str>,
    has_tasks: bool,
    colors: &ThemeColors,
) {
    let [feedback_area, shortcuts_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

    // 反馈区：每次写入覆盖上一条
    if let Some(message) = feedback {
        let paragraph = Paragraph::new(format!("  {}", message))
            .style(Style::default().fg(colors.error));
        frame.render_widget(paragraph, feedback_area);
    }

    let shortcuts = get_shortcuts(has_tasks);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, shortcuts_area);
}

fn get_shortcuts(has_tasks: bool) -> Vec<(&'static str, &'static str)> {
    if has_tasks {
        vec![
            ("n", "new"),
            ("x", "delete"),
            ("s", "status"),
            ("p", "priority"),
            ("u", "profile"),
            ("r", "refresh"),
            ("q", "quit"),
        ]
    } else {
        vec![("n", "new"), ("u", "profile"), ("r", "refresh"), ("q", "quit")]
    }
}
