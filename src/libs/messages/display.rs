//! Display implementation for recap application messages.
//!
//! All user-facing message text lives here, keyed by the `Message` enum.
//! Keeping the text in one place gives consistent formatting across the
//! application and makes the strings easy to audit or localize later.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigModuleTodoist => "Todoist".to_string(),
            Message::ConfigModuleClaude => "Claude".to_string(),
            Message::TodoistNotConfigured => "Todoist is not configured. Run 'recap init' first".to_string(),
            Message::ClaudeNotConfigured => "Claude is not configured. Run 'recap init' first".to_string(),

            // === CREDENTIAL MESSAGES ===
            Message::TokenNotFoundInEnv(name, env_var) => {
                format!("{} API token not found in environment variable {}", name, env_var)
            }
            Message::ValidatingToken(name) => format!("Validating {} token...", name),
            Message::TokenValidated(name) => format!("{} token is valid", name),
            Message::TokenValidationFailed(name) => format!("{} token validation failed", name),
            Message::EmptyToken => "Token cannot be empty".to_string(),

            // === TASK MESSAGES ===
            Message::OpenTasksHeader => "Open tasks".to_string(),
            Message::NoOpenTasks => "No open tasks found".to_string(),
            Message::CompletedTasksHeader(week, project) => {
                format!("[{}] Completed tasks for project \"{}\"", week, project)
            }
            Message::NoCompletedTasks(week) => format!("No tasks completed in week {}", week),
            Message::ProjectFetchFailed(project, error) => {
                format!("Error getting tasks for project {}: {}", project, error)
            }

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(week) => format!("Claude summary for {}", week),
            Message::WeekOf(date) => format!("Week of {}", date),
            Message::CompletedTaskCount(count) => format!("Tasks completed: {}", count),
            Message::KeyCategories(categories) => format!("Key categories: {}", categories),
            Message::ProductivityTrends(trends) => format!("Productivity trends: {}", trends),
            Message::TrendsHeader => "Productivity trend analysis".to_string(),
            Message::NoContentInResponse => "No content in Claude response".to_string(),
            Message::SummaryParseFailed => "Failed to parse summary response".to_string(),
        };
        write!(f, "{}", text)
    }
}
