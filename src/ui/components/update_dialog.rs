//! 状态/优先级更新弹窗组件
//!
//! 打开时捕获目标任务 ID，确认逻辑只从该状态读取 —— 重复打开不会叠加
//! 提交路径，一次确认恰好提交一次。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{TaskPriority, TaskStatus};
use crate::theme::ThemeColors;

/// 更新目标字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Status,
    Priority,
}

impl UpdateField {
    /// 弹窗标题
    pub fn title(&self) -> &'static str {
        match self {
            UpdateField::Status => "Update Status",
            UpdateField::Priority => "Update Priority",
        }
    }

    /// 提交失败时的弹窗内错误文案
    pub fn failure_message(&self) -> &'static str {
        match self {
            UpdateField::Status => "Failed to update status. Please try again.",
            UpdateField::Priority => "Failed to update priority. Please try again.",
        }
    }
}

/// 更新弹窗数据
#[derive(Debug, Clone)]
pub struct UpdateDialogData {
    /// 打开时捕获的目标任务 ID
    pub task_id: u64,
    /// 目标任务标题（仅展示）
    pub task_title: String,
    /// 更新哪个字段
    pub field: UpdateField,
    /// 当前选中的选项下标
    pub selected: usize,
    /// 弹窗内错误信息（提交失败时展示，弹窗保持打开）
    pub error: Option<String>,
    /// 是否有提交在途（在途时忽略再次确认）
    pub submitting: bool,
}

impl UpdateDialogData {
    pub fn new(task_id: u64, task_title: impl Into<String>, field: UpdateField) -> Self {
        Self {
            task_id,
            task_title: task_title.into(),
            field,
            selected: 0,
            error: None,
            submitting: false,
        }
    }

    /// 选项个数
    pub fn len(&self) -> usize {
        match self.field {
            UpdateField::Status => TaskStatus::all().len(),
            UpdateField::Priority => TaskPriority::all().len(),
        }
    }

    /// 选项显示文案（即 wire 值）
    pub fn option_labels(&self) -> Vec<&'static str> {
        match self.field {
            UpdateField::Status => TaskStatus::all().iter().map(|s| s.as_str()).collect(),
            UpdateField::Priority => TaskPriority::all().iter().map(|p| p.as_str()).collect(),
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.len();
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        self.selected = if self.selected == 0 {
            self.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// 当前选中的状态值（仅 Status 弹窗）
    pub fn selected_status(&self) -> Option<TaskStatus> {
        match self.field {
            UpdateField::Status => TaskStatus::all().get(self.selected).copied(),
            UpdateField::Priority => None,
        }
    }

    /// 当前选中的优先级值（仅 Priority 弹窗）
    pub fn selected_priority(&self) -> Option<TaskPriority> {
        match self.field {
            UpdateField::Priority => TaskPriority::all().get(self.selected).copied(),
            UpdateField::Status => None,
        }
    }
}

/// 渲染更新弹窗
pub fn render(frame: &mut Frame, dialog: &UpdateDialogData, colors: &ThemeColors) {
    let area = frame.area();

    let options = dialog.option_labels();
    let popup_width = 46u16.min(area.width.saturating_sub(4));
    let popup_height = (options.len() as u16 + 7).min(area.height.saturating_sub(2));

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    let mut lines = Vec::new();

    // 目标任务
    lines.push(Line::from(Span::styled(
        dialog.task_title.clone(),
        Style::default().fg(colors.muted),
    )));
    lines.push(Line::from(""));

    // 选项列表
    for (i, label) in options.iter().enumerate() {
        let is_selected = i == dialog.selected;
        let selector = if is_selected { "❯ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        lines.push(Line::from(vec![
            Span::styled(selector, Style::default().fg(colors.highlight)),
            Span::styled(*label, style),
        ]));
    }

    lines.push(Line::from(""));

    // 错误 / 在途提示行
    if let Some(error) = &dialog.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.error),
        )));
    } else if dialog.submitting {
        lines.push(Line::from(Span::styled(
            "Updating...",
            Style::default().fg(colors.muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter confirm · j/k select · Esc cancel",
            Style::default().fg(colors.muted),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", dialog.field.title()))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_captures_task_id() {
        let dialog = UpdateDialogData::new(5, "Buy milk", UpdateField::Status);
        assert_eq!(dialog.task_id, 5);
        assert_eq!(dialog.selected, 0);
        assert!(dialog.error.is_none());
        assert!(!dialog.submitting);
    }

    #[test]
    fn test_status_options() {
        let dialog = UpdateDialogData::new(1, "t", UpdateField::Status);
        assert_eq!(
            dialog.option_labels(),
            vec!["pending", "active", "completed", "canceled"]
        );
    }

    #[test]
    fn test_priority_options() {
        let dialog = UpdateDialogData::new(1, "t", UpdateField::Priority);
        assert_eq!(dialog.option_labels(), vec!["low", "medium", "high"]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut dialog = UpdateDialogData::new(1, "t", UpdateField::Priority);
        dialog.select_previous();
        assert_eq!(dialog.selected, 2); // 回绕到末尾

        dialog.select_next();
        assert_eq!(dialog.selected, 0);
    }

    #[test]
    fn test_selected_value_matches_field() {
        let mut dialog = UpdateDialogData::new(1, "t", UpdateField::Status);
        dialog.select_next();
        assert_eq!(dialog.selected_status(), Some(crate::model::TaskStatus::Active));
        assert_eq!(dialog.selected_priority(), None);

        let dialog = UpdateDialogData::new(1, "t", UpdateField::Priority);
        assert_eq!(dialog.selected_priority(), Some(crate::model::TaskPriority::Low));
        assert_eq!(dialog.selected_status(), None);
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            UpdateField::Status.failure_message(),
            "Failed to update status. Please try again."
        );
        assert_eq!(
            UpdateField::Priority.failure_message(),
            "Failed to update priority. Please try again."
        );
    }
}
