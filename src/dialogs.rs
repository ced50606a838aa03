//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

// 从 ui/components 导入对话框数据类型
pub use crate::ui::components::update_dialog::{UpdateDialogData, UpdateField};

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    // === New Task ===
    /// 是否显示 New Task 弹窗
    pub show_new_task: bool,
    /// New Task 输入内容
    pub new_task_input: String,
    /// New Task 是否有提交在途（成功才清空输入并关闭）
    pub new_task_submitting: bool,

    // === Update (Status / Priority) ===
    /// 更新弹窗（打开时捕获目标任务 ID）
    pub update_dialog: Option<UpdateDialogData>,

    // === Profile ===
    /// Profile 弹窗（原始 JSON 载荷）
    pub profile_popup: Option<String>,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开 New Task 弹窗
    pub fn open_new_task(&mut self) {
        self.new_task_input.clear();
        self.new_task_submitting = false;
        self.show_new_task = true;
    }

    /// 关闭 New Task 弹窗（清空输入）
    pub fn close_new_task(&mut self) {
        self.show_new_task = false;
        self.new_task_input.clear();
        self.new_task_submitting = false;
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.show_new_task || self.update_dialog.is_some() || self.profile_popup.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_state() {
        let state = DialogState::new();
        assert!(!state.show_new_task);
        assert!(state.new_task_input.is_empty());
        assert!(state.update_dialog.is_none());
        assert!(state.profile_popup.is_none());
        assert!(!state.has_active_dialog());
    }

    #[test]
    fn test_open_new_task_resets_input() {
        let mut state = DialogState::new();
        state.new_task_input = "leftover".to_string();

        state.open_new_task();
        assert!(state.show_new_task);
        assert!(state.new_task_input.is_empty());
        assert!(!state.new_task_submitting);
    }

    #[test]
    fn test_close_new_task_clears_input() {
        let mut state = DialogState::new();
        state.open_new_task();
        state.new_task_input = "Buy milk".to_string();
        state.new_task_submitting = true;

        state.close_new_task();
        assert!(!state.show_new_task);
        assert!(state.new_task_input.is_empty());
        assert!(!state.new_task_submitting);
    }

    #[test]
    fn test_has_active_dialog() {
        let mut state = DialogState::new();
        assert!(!state.has_active_dialog());

        state.open_new_task();
        assert!(state.has_active_dialog());

        state.close_new_task();
        state.update_dialog = Some(UpdateDialogData::new(1, "t", UpdateField::Status));
        assert!(state.has_active_dialog());

        state.update_dialog = None;
        state.profile_popup = Some("{}".to_string());
        assert!(state.has_active_dialog());
    }
}
