pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use components::{footer, header, new_task_dialog, profile_popup, task_table, update_dialog};

/// 渲染任务视图
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(4),
    ])
    .areas(area);

    header::render(frame, header_area, app.client.base_url(), colors);
    task_table::render(
        frame,
        table_area,
        &app.tasks,
        app.table_state.selected(),
        colors,
    );
    footer::render(
        frame,
        footer_area,
        app.feedback.as_deref(),
        !app.tasks.is_empty(),
        colors,
    );

    // 弹窗覆盖层（最多一个活跃）
    if app.dialogs.show_new_task {
        new_task_dialog::render(
            frame,
            &app.dialogs.new_task_input,
            app.dialogs.new_task_submitting,
            colors,
        );
    }
    if let Some(dialog) = &app.dialogs.update_dialog {
        update_dialog::render(frame, dialog, colors);
    }
    if let Some(payload) = &app.dialogs.profile_popup {
        profile_popup::render(frame, payload, colors);
    }
}
