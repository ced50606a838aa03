//! Task API client
//!
//! Thin blocking client for the task-manager API. One request per call; the
//! app runs each call on a short-lived worker thread so the UI loop never
//! blocks. No request timeout is configured — failures surface through the
//! transport's native error channel only.

use crate::error::Result;
use crate::model::{Task, TaskListResponse, TaskPriority, TaskStatus};
use crate::session::Session;

/// API client bound to one server and one session.
///
/// Cheap to clone; worker threads each take their own copy.
#[derive(Debug, Clone)]
pub struct TaskClient {
    base_url: String,
    bearer: String,
}

impl TaskClient {
    pub fn new(base_url: &str, session: &Session) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: session.bearer(),
        }
    }

    /// Build a full URL for an API path (`path` starts with '/').
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The server origin (the login page lives at its root).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /profile — raw payload, displayed as-is.
    pub fn fetch_profile(&self) -> Result<String> {
        let response = ureq::get(&self.url("/profile"))
            .set("Authorization", &self.bearer)
            .call()?;
        Ok(response.into_string()?)
    }

    /// GET /tasks — the full task collection, server order.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = ureq::get(&self.url("/tasks"))
            .set("Authorization", &self.bearer)
            .call()?;
        let list: TaskListResponse = response.into_json()?;
        Ok(list.data)
    }

    /// POST /task/create with `{"title": ...}`. Response body ignored.
    pub fn create_task(&self, title: &str) -> Result<()> {
        ureq::post(&self.url("/task/create"))
            .set("Authorization", &self.bearer)
            .send_json(serde_json::json!({ "title": title }))?;
        Ok(())
    }

    /// DELETE /task/delete/{id}. Response body ignored.
    pub fn delete_task(&self, id: u64) -> Result<()> {
        ureq::delete(&self.url(&format!("/task/delete/{}", id)))
            .set("Authorization", &self.bearer)
            .call()?;
        Ok(())
    }

    /// PUT /task/update/{id} with `{"status": ...}`. Response body ignored.
    pub fn update_status(&self, id: u64, status: TaskStatus) -> Result<()> {
        ureq::put(&self.url(&format!("/task/update/{}", id)))
            .set("Authorization", &self.bearer)
            .send_json(serde_json::json!({ "status": status }))?;
        Ok(())
    }

    /// PUT /task/update/{id} with `{"priority": ...}`. Response body ignored.
    pub fn update_priority(&self, id: u64, priority: TaskPriority) -> Result<()> {
        ureq::put(&self.url(&format!("/task/update/{}", id)))
            .set("Authorization", &self.bearer)
            .send_json(serde_json::json!({ "priority": priority }))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TaskClient {
        TaskClient::new("http://localhost:8080", &Session::new("abc123"))
    }

    #[test]
    fn test_url_building() {
        let client = client();
        assert_eq!(client.url("/tasks"), "http://localhost:8080/tasks");
        assert_eq!(
            client.url("/task/delete/5"),
            "http://localhost:8080/task/delete/5"
        );
        assert_eq!(
            client.url("/task/update/12"),
            "http://localhost:8080/task/update/12"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = TaskClient::new("http://localhost:8080/", &Session::new("t"));
        assert_eq!(client.url("/tasks"), "http://localhost:8080/tasks");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_bearer_header_from_session() {
        let client = client();
        assert_eq!(client.bearer, "Bearer abc123");
    }

    #[test]
    fn test_update_bodies_serialize_lowercase() {
        let status_body = serde_json::json!({ "status": TaskStatus::Pending });
        assert_eq!(status_body.to_string(), r#"{"status":"pending"}"#);

        let priority_body = serde_json::json!({ "priority": TaskPriority::Low });
        assert_eq!(priority_body.to_string(), r#"{"priority":"low"}"#);
    }
}
