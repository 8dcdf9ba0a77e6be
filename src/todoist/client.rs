//! Todoist REST client

use serde::Serialize;
use std::fmt;

use super::error::{PushError, Result};
use super::TaskPusher;
use crate::syllabus::SubTask;

pub const DEFAULT_API_URL: &str = "https://api.todoist.com/rest/v2";

#[derive(Debug, Serialize)]
struct CreateTask<'a> {
    content: &'a str,
    due_date: String,
}

/// Creates tasks in Todoist with a personal API token
#[derive(Clone)]
pub struct TodoistClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl TodoistClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_api_url(token, DEFAULT_API_URL)
    }

    /// Point the client at another REST root, e.g. a local test server
    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("classradar/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
        })
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.api_url.trim_end_matches('/'))
    }
}

// Keeps the token out of debug logs
impl fmt::Debug for TodoistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoistClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl TaskPusher for TodoistClient {
    async fn push(&self, task: &SubTask) -> Result<()> {
        let body = CreateTask {
            content: &task.label,
            due_date: task.date_string(),
        };

        let response = self
            .http
            .post(self.tasks_url())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PushError::Rejected(response.status()));
        }
        Ok(())
    }
}
