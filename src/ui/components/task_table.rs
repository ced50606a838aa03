//! 任务表格组件
//!
//! 每次 fetch 应用后整表重建：1 起始行号、标题、状态、优先级。

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染任务表格
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
) {
    if tasks.is_empty() {
        render_empty(frame, area, colors);
        return;
    }

    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from("#"),
        Cell::from("TITLE"),
        Cell::from("STATUS"),
        Cell::from("PRIORITY"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行（服务端顺序，行号 1 起始）
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let row_style = if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from((i + 1).to_string()).style(Style::default().fg(colors.muted)),
                Cell::from(task.title.clone()),
                Cell::from(task.status.clone())
                    .style(Style::default().fg(status_color(&task.status, colors))),
                Cell::from(task.priority.clone())
                    .style(Style::default().fg(priority_color(&task.priority, colors))),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Length(4),  // 行号
        Constraint::Fill(1),    // TITLE (flex)
        Constraint::Length(11), // STATUS
        Constraint::Length(10), // PRIORITY
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(" Tasks ")
                .title_style(Style::default().fg(colors.text)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// 空列表占位
fn render_empty(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Tasks ")
        .title_style(Style::default().fg(colors.text));

    let paragraph = Paragraph::new("\nNo tasks yet. Press n to create one.")
        .style(Style::default().fg(colors.muted))
        .block(block)
        .centered();

    frame.render_widget(paragraph, area);
}

/// 状态列颜色（词表外的值按普通文字渲染）
fn status_color(status: &str, colors: &ThemeColors) -> Color {
    match status {
        "pending" => colors.warning,
        "active" => colors.info,
        "completed" => colors.success,
        "canceled" => colors.muted,
        _ => colors.text,
    }
}

/// 优先级列颜色
fn priority_color(priority: &str, colors: &ThemeColors) -> Color {
    match priority {
        "high" => colors.error,
        "medium" => colors.warning,
        "low" => colors.muted,
        _ => colors.text,
    }
}
