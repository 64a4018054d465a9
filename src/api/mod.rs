//! API client modules for external service integrations.
//!
//! Provides the HTTP clients recap depends on: Todoist for task retrieval
//! and Claude for summarization. Both share the same error shape and the
//! same bearer-token resolution flow.
//!
//! ## Features
//!
//! - **Todoist**: Projects, open tasks, and completed-task queries
//! - **Claude**: Messages API access for summaries and trend analysis
//! - **Credentials**: Environment lookup, encrypted cache, masked prompting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recap::api::{Todoist, TodoistConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = TodoistConfig::default();
//! let todoist = Todoist::connect(&config).await?;
//! let tasks = todoist.all_open_tasks().await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use reqwest::StatusCode;
use std::env;
use thiserror::Error;

// API client modules
pub mod claude;
pub mod todoist;

// Re-export the clients and their configuration structs for easier access
pub use claude::{Claude, ClaudeConfig};
pub use todoist::{Todoist, TodoistConfig};

/// Error returned when an external API responds with a failure status.
///
/// Carries the HTTP status and whatever message body the service returned,
/// so the top-level command can print something actionable.
#[derive(Debug, Error)]
#[error("{service} API error (status {status}): {message}")]
pub struct ApiError {
    pub service: &'static str,
    pub status: StatusCode,
    pub message: String,
}

/// Converts a failure response into an [`ApiError`], passing success through.
pub(crate) async fn check_status(service: &'static str, res: reqwest::Response) -> Result<reqwest::Response> {
    let status = res.status();
    if status.is_client_error() || status.is_server_error() {
        let message = res.text().await.unwrap_or_default();
        return Err(ApiError { service, status, message }.into());
    }
    Ok(res)
}

/// A bearer token resolved from the environment or an encrypted cache.
///
/// Resolution order: environment variable first, then the on-disk encrypted
/// secret, then an interactive masked prompt. Prompted values are cached
/// encrypted for subsequent runs.
pub struct Token {
    name: &'static str,
    env_var: &'static str,
    secret: Secret,
}

impl Token {
    pub fn new(name: &'static str, env_var: &'static str, secret_file: &str, prompt: &str) -> Self {
        Self {
            name,
            env_var,
            secret: Secret::new(secret_file, prompt),
        }
    }

    pub fn resolve(&self) -> Result<String> {
        if let Ok(token) = env::var(self.env_var) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                return Ok(token);
            }
        }

        msg_info!(Message::TokenNotFoundInEnv(self.name.to_string(), self.env_var.to_string()));
        let token = self.secret.get_or_prompt()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            msg_bail_anyhow!(Message::EmptyToken);
        }
        Ok(token)
    }

    /// Drops the cached secret so the next resolve prompts again.
    pub fn invalidate(&self) -> Result<()> {
        self.secret.forget()
    }
}
