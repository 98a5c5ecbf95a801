//! Remote todo API client
//!
//! Best-effort mirror against the dummyjson demo backend. Every call is
//! a plain blocking request; callers run them on background threads and
//! feed results back to the UI loop.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TidoError};
use crate::model::Todo;

/// Default demo backend
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

const TIMEOUT_SECS: u64 = 10;

/// `GET /todos` response envelope (minimal fields)
#[derive(Debug, Deserialize)]
struct TodosResponse {
    #[serde(default)]
    todos: Vec<Todo>,
}

/// Remote API handle. Cheap to clone into worker threads.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    base_url: String,
}

impl RemoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Build a client from an optional config override
    pub fn from_config(base_url: Option<&str>) -> Self {
        Self::new(base_url.unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the initial todo list: `GET /todos`
    pub fn fetch_todos(&self) -> Result<Vec<Todo>> {
        let url = format!("{}/todos", self.base_url);
        let response = ureq::get(&url)
            .set("Accept", "application/json")
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .call()
            .map_err(|e| TidoError::http(e.to_string()))?;

        let body: TodosResponse = response.into_json()?;
        Ok(body.todos)
    }

    /// Push a completion flip: `PUT /todos/{id}` with `{"completed": b}`
    ///
    /// Returns the server's version of the todo; its `completed` value is
    /// authoritative and overwrites the optimistic local state.
    pub fn update_todo(&self, id: u64, completed: bool) -> Result<Todo> {
        let url = format!("{}/todos/{}", self.base_url, id);
        let response = ureq::put(&url)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .send_json(serde_json::json!({ "completed": completed }))
            .map_err(|e| TidoError::http(e.to_string()))?;

        let todo: Todo = response.into_json()?;
        Ok(todo)
    }

    /// Delete a todo remotely: `DELETE /todos/{id}`
    ///
    /// The response body (the deleted todo) is not needed, only success.
    pub fn delete_todo(&self, id: u64) -> Result<()> {
        let url = format!("{}/todos/{}", self.base_url, id);
        ureq::delete(&url)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .call()
            .map_err(|e| TidoError::http(e.to_string()))?;
        Ok(())
    }
}

impl Default for RemoteApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
