//! 任务数据模型（API 侧拥有，本地不持久化）

use serde::{Deserialize, Serialize};

/// 任务数据
///
/// `status` 和 `priority` 保留服务端原始字符串：表格按服务端返回值渲染，
/// 更新选择器才使用客户端固定词表（[`TaskStatus`] / [`TaskPriority`]）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID
    pub id: u64,
    /// 任务标题
    pub title: String,
    /// 任务状态（如 "pending"）
    #[serde(default)]
    pub status: String,
    /// 任务优先级（如 "low"）
    #[serde(default)]
    pub priority: String,
}

/// `GET /tasks` 响应体：`{ "data": [Task, ...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub data: Vec<Task>,
}

/// 状态词表（更新选择器的固定选项）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Active,
    Completed,
    Canceled,
}

impl TaskStatus {
    /// 全部选项（选择器显示顺序）
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::Pending,
            TaskStatus::Active,
            TaskStatus::Completed,
            TaskStatus::Canceled,
        ]
    }

    /// wire 值（请求体中使用）
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Active => "active",
            TaskStatus::Completed => "completed",
            TaskStatus::Canceled => "canceled",
        }
    }
}

/// 优先级词表（更新选择器的固定选项）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// 全部选项（选择器显示顺序）
    pub fn all() -> &'static [TaskPriority] {
        &[TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
    }

    /// wire 值（请求体中使用）
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_deserialization() {
        // spec 场景：单任务响应
        let json = r#"{"data":[{"id":1,"title":"Buy milk","status":"pending","priority":"low"}]}"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.data.len(), 1);
        let task = &response.data[0];
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, "pending");
        assert_eq!(task.priority, "low");
    }

    #[test]
    fn test_list_response_preserves_server_order() {
        let json = r#"{"data":[
            {"id":3,"title":"c","status":"active","priority":"high"},
            {"id":1,"title":"a","status":"pending","priority":"low"},
            {"id":2,"title":"b","status":"completed","priority":"medium"}
        ]}"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();

        let ids: Vec<u64> = response.data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        // 服务端可能省略 status/priority，不应导致整个 fetch 失败
        let json = r#"{"data":[{"id":7,"title":"bare"}]}"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.data[0].status, "");
        assert_eq!(response.data[0].priority, "");
    }

    #[test]
    fn test_unknown_vocabulary_is_preserved() {
        // 词表是服务端拥有的，未知值原样渲染
        let json = r#"{"data":[{"id":1,"title":"t","status":"Blocked","priority":"urgent"}]}"#;
        let response: TaskListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.data[0].status, "Blocked");
        assert_eq!(response.data[0].priority, "urgent");
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(TaskStatus::Pending.as_str(), "pending");
        assert_eq!(
            serde_json::to_string(&TaskStatus::Canceled).unwrap(),
            "\"canceled\""
        );
        assert_eq!(TaskStatus::all().len(), 4);
    }

    #[test]
    fn test_priority_wire_values() {
        assert_eq!(TaskPriority::Low.as_str(), "low");
        assert_eq!(
            serde_json::to_string(&TaskPriority::High).unwrap(),
            "\"high\""
        );
        assert_eq!(TaskPriority::all().len(), 3);
    }
}
