//! 全局应用状态
//!
//! UI 主循环单线程运行；每个网络请求在独立的短命线程上执行，结果通过
//! mpsc 通道送回，由主循环每帧轮询并应用。fetch 响应携带单调递增的
//! 序号，只有与最近一次发出的序号一致的响应才会被应用，过期响应直接丢弃。

use std::sync::mpsc;
use std::thread;

use ratatui::widgets::TableState;

use crate::client::TaskClient;
use crate::dialogs::{DialogState, UpdateDialogData, UpdateField};
use crate::error::TaskdeckError;
use crate::model::Task;
use crate::theme::ThemeColors;

/// 后台请求结果事件
#[derive(Debug)]
pub enum ApiEvent {
    /// 任务列表响应（seq 与发出时的序号一致才应用）
    Tasks {
        seq: u64,
        result: Result<Vec<Task>, TaskdeckError>,
    },
    /// 创建结果
    Created(Result<(), TaskdeckError>),
    /// 删除结果
    Deleted(Result<(), TaskdeckError>),
    /// 状态/优先级更新结果
    Updated {
        field: UpdateField,
        result: Result<(), TaskdeckError>,
    },
    /// Profile 响应（原始 JSON 文本）
    Profile(Result<String, TaskdeckError>),
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// API 客户端（启动时绑定 session，只读）
    pub client: TaskClient,
    /// 最近一次完成的 fetch 的任务列表（服务端顺序）
    pub tasks: Vec<Task>,
    /// 表格选择状态
    pub table_state: TableState,
    /// 反馈区内容（每次写入覆盖上一条，最后一条生效）
    pub feedback: Option<String>,
    /// 对话框状态
    pub dialogs: DialogState,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 后台结果发送端（克隆给工作线程）
    api_tx: mpsc::Sender<ApiEvent>,
    /// 后台结果接收端（主循环每帧轮询）
    api_rx: mpsc::Receiver<ApiEvent>,
    /// 最近一次发出的 fetch 序号
    fetch_seq: u64,
}

impl App {
    pub fn new(client: TaskClient, colors: ThemeColors) -> Self {
        let (api_tx, api_rx) = mpsc::channel();

        Self {
            should_quit: false,
            client,
            tasks: Vec::new(),
            table_state: TableState::default(),
            feedback: None,
            dialogs: DialogState::new(),
            colors,
            api_tx,
            api_rx,
            fetch_seq: 0,
        }
    }

    // ========== 后台请求 ==========

    /// 发起一次任务列表拉取（表格整体重建于响应应用时）
    pub fn start_fetch(&mut self) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let result = client.list_tasks();
            let _ = tx.send(ApiEvent::Tasks { seq, result });
        });
    }

    /// 发起 Profile 拉取
    pub fn start_fetch_profile(&mut self) {
        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let result = client.fetch_profile();
            let _ = tx.send(ApiEvent::Profile(result));
        });
    }

    /// 轮询后台结果并应用（主循环每帧调用一次）
    pub fn poll_api_events(&mut self) {
        while let Ok(event) = self.api_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// 应用单个后台结果事件
    pub fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Tasks { seq, result } => {
                // 过期响应：不是最近一次发出的 fetch，丢弃
                if seq != self.fetch_seq {
                    return;
                }
                match result {
                    Ok(tasks) => {
                        self.tasks = tasks;
                        self.ensure_selection();
                    }
                    // 失败保留现有行（陈旧视图可见）
                    Err(_) => self.set_feedback("Failed to fetch tasks."),
                }
            }
            ApiEvent::Created(result) => match result {
                Ok(()) => {
                    // 成功才清空输入并关闭弹窗
                    self.dialogs.close_new_task();
                    self.start_fetch();
                }
                Err(_) => {
                    self.dialogs.new_task_submitting = false;
                    self.set_feedback("Failed to create a task.");
                }
            },
            ApiEvent::Deleted(result) => match result {
                Ok(()) => self.start_fetch(),
                Err(_) => self.set_feedback("Failed to delete the task."),
            },
            ApiEvent::Updated { field, result } => match result {
                Ok(()) => {
                    self.dialogs.update_dialog = None;
                    self.start_fetch();
                }
                Err(_) => match self.dialogs.update_dialog.as_mut() {
                    // 弹窗保持打开，行内展示错误，可直接重试
                    Some(dialog) => {
                        dialog.submitting = false;
                        dialog.error = Some(field.failure_message().to_string());
                    }
                    // 弹窗已被用户关闭，退回反馈区
                    None => self.set_feedback(field.failure_message()),
                },
            },
            ApiEvent::Profile(result) => match result {
                Ok(raw) => self.dialogs.profile_popup = Some(raw),
                Err(_) => self.set_feedback("Failed to fetch user details. Please try again."),
            },
        }
    }

    // ========== 列表选择 ==========

    /// 确保选中项在列表范围内
    pub fn ensure_selection(&mut self) {
        if self.tasks.is_empty() {
            self.table_state.select(None);
            return;
        }
        match self.table_state.selected() {
            Some(i) if i >= self.tasks.len() => {
                self.table_state.select(Some(self.tasks.len() - 1));
            }
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((current + 1) % self.tasks.len()));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let previous = if current == 0 {
            self.tasks.len() - 1
        } else {
            current - 1
        };
        self.table_state.select(Some(previous));
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.table_state.selected().and_then(|i| self.tasks.get(i))
    }

    // ========== New Task ==========

    /// 打开 New Task 弹窗
    pub fn open_new_task_dialog(&mut self) {
        self.dialogs.open_new_task();
    }

    /// 关闭 New Task 弹窗
    pub fn close_new_task_dialog(&mut self) {
        self.dialogs.close_new_task();
    }

    /// New Task 输入字符
    pub fn new_task_input_char(&mut self, c: char) {
        self.dialogs.new_task_input.push(c);
    }

    /// New Task 删除字符
    pub fn new_task_delete_char(&mut self) {
        self.dialogs.new_task_input.pop();
    }

    /// 提交新任务。返回是否真的发出了请求。
    ///
    /// 标题去除首尾空白后为空时不发任何网络请求，只写反馈区。
    pub fn submit_new_task(&mut self) -> bool {
        if self.dialogs.new_task_submitting {
            return false;
        }

        let title = self.dialogs.new_task_input.trim().to_string();
        if title.is_empty() {
            self.set_feedback("Task title cannot be empty.");
            return false;
        }

        self.dialogs.new_task_submitting = true;
        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let result = client.create_task(&title);
            let _ = tx.send(ApiEvent::Created(result));
        });
        true
    }

    // ========== Delete ==========

    /// 删除当前选中的任务。返回是否真的发出了请求。
    pub fn delete_selected_task(&mut self) -> bool {
        let Some(task) = self.selected_task() else {
            return false;
        };
        let id = task.id;

        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let result = client.delete_task(id);
            let _ = tx.send(ApiEvent::Deleted(result));
        });
        true
    }

    // ========== Update (Status / Priority) ==========

    /// 为当前选中的任务打开更新弹窗（打开时捕获任务 ID）
    pub fn open_update_dialog(&mut self, field: UpdateField) {
        let Some((id, title)) = self.selected_task().map(|t| (t.id, t.title.clone())) else {
            return;
        };
        self.dialogs.update_dialog = Some(UpdateDialogData::new(id, title, field));
    }

    /// 关闭更新弹窗
    pub fn close_update_dialog(&mut self) {
        self.dialogs.update_dialog = None;
    }

    /// 更新弹窗 - 选择上一项
    pub fn update_dialog_previous(&mut self) {
        if let Some(dialog) = self.dialogs.update_dialog.as_mut() {
            dialog.select_previous();
        }
    }

    /// 更新弹窗 - 选择下一项
    pub fn update_dialog_next(&mut self) {
        if let Some(dialog) = self.dialogs.update_dialog.as_mut() {
            dialog.select_next();
        }
    }

    /// 确认更新：按打开时捕获的任务 ID 提交当前选中值。
    /// 返回是否真的发出了请求（在途时的重复确认不再提交）。
    pub fn update_dialog_confirm(&mut self) -> bool {
        let Some(dialog) = self.dialogs.update_dialog.as_mut() else {
            return false;
        };
        if dialog.submitting {
            return false;
        }

        dialog.submitting = true;
        dialog.error = None;

        let id = dialog.task_id;
        let field = dialog.field;
        let status = dialog.selected_status();
        let priority = dialog.selected_priority();

        let client = self.client.clone();
        let tx = self.api_tx.clone();
        thread::spawn(move || {
            let result = match field {
                UpdateField::Status => {
                    // selected 始终落在词表内
                    let Some(status) = status else { return };
                    client.update_status(id, status)
                }
                UpdateField::Priority => {
                    let Some(priority) = priority else { return };
                    client.update_priority(id, priority)
                }
            };
            let _ = tx.send(ApiEvent::Updated { field, result });
        });
        true
    }

    // ========== 反馈区 ==========

    /// 写反馈区（覆盖上一条）
    pub fn set_feedback(&mut self, message: impl Into<String>) {
        self.feedback = Some(message.into());
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

// ============================================================================
// Tests
// ============================================================================
