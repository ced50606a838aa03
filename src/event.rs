use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::dialogs::UpdateField;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // Profile 弹窗
    if app.dialogs.profile_popup.is_some() {
        handle_profile_popup_key(app, key);
        return;
    }

    // 更新弹窗（Status / Priority）
    if app.dialogs.update_dialog.is_some() {
        handle_update_dialog_key(app, key);
        return;
    }

    // New Task 弹窗
    if app.dialogs.show_new_task {
        handle_new_task_dialog_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理任务列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 功能按键 - New Task
        KeyCode::Char('n') => {
            app.open_new_task_dialog();
        }

        // 功能按键 - 删除选中任务
        KeyCode::Char('x') => {
            app.delete_selected_task();
        }

        // 功能按键 - 更新状态
        KeyCode::Char('s') => {
            app.open_update_dialog(UpdateField::Status);
        }

        // 功能按键 - 更新优先级
        KeyCode::Char('p') => {
            app.open_update_dialog(UpdateField::Priority);
        }

        // 功能按键 - Profile
        KeyCode::Char('u') => {
            app.start_fetch_profile();
        }

        // 功能按键 - 刷新
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.start_fetch();
        }

        _ => {}
    }
}

/// 处理 New Task 弹窗的键盘事件
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认创建
        KeyCode::Enter => {
            app.submit_new_task();
        }

        // 取消
        KeyCode::Esc => {
            app.close_new_task_dialog();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.new_task_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.new_task_input_char(c);
        }

        _ => {}
    }
}

/// 处理更新弹窗的键盘事件
fn handle_update_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.update_dialog_previous();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.update_dialog_next();
        }

        // 确认提交
        KeyCode::Enter => {
            app.update_dialog_confirm();
        }

        // 取消
        KeyCode::Esc => {
            app.close_update_dialog();
        }

        _ => {}
    }
}

/// 处理 Profile 弹窗的键盘事件
fn handle_profile_popup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭弹窗
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
            app.dialogs.profile_popup = None;
        }
        _ => {}
    }
}
