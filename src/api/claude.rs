//! Anthropic Claude API client.
//!
//! Sends completed-task batches to the Messages API and parses the model's
//! JSON replies into weekly summaries and cross-week trend analyses.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recap::api::{Claude, ClaudeConfig};
//! use recap::libs::week::BusinessWeek;
//!
//! # async fn run(tasks: Vec<recap::api::todoist::Task>) -> anyhow::Result<()> {
//! let claude = Claude::connect(&ClaudeConfig::default()).await?;
//! let week = BusinessWeek::current();
//! let summary = claude.summarize_tasks(&tasks, &week).await?;
//! # Ok(())
//! # }
//! ```

use super::{ApiError, Token};
use crate::api::todoist::Task;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::week::BusinessWeek;
use crate::{msg_error, msg_error_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::{DateTime, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE: &str = "Claude";
const BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";
const ENV_KEY: &str = "CLAUDE_API_KEY";
const SECRET_FILE: &str = ".claude_secret";
const REQUEST_TIMEOUT_SECS: u64 = 60;

const MESSAGES_URL: &str = "messages";

/// Cost-effective default model for summarization workloads.
pub const MODEL_HAIKU: &str = "claude-3-5-haiku-latest";

const SUMMARY_MAX_TOKENS: u32 = 500;
const TRENDS_MAX_TOKENS: u32 = 800;
const VALIDATE_MAX_TOKENS: u32 = 10;

const SUMMARY_SYSTEM_PROMPT: &str = r#"You are an expert productivity analyst. Analyze completed tasks and provide a concise summary.

Your response must be valid JSON with this exact structure:
{
  "summary": "2-3 sentence overview of work accomplished",
  "key_categories": ["category1", "category2", "category3"],
  "productivity_trends": "Brief note about productivity patterns"
}

Focus on:
- Main themes and categories of work
- Notable accomplishments
- Work patterns or focus areas"#;

const TRENDS_SYSTEM_PROMPT: &str = r#"You are an expert productivity analyst specializing in trend analysis. Analyze current week tasks alongside historical weekly summaries to identify patterns, trends, and provide actionable insights.

Your response must be valid JSON with this exact structure:
{
  "overall_summary": "High-level overview of recent productivity patterns",
  "productivity_trend": "increasing/decreasing/stable with brief explanation",
  "category_trends": [
    {
      "category": "category name",
      "trend": "increasing/decreasing/stable/new/disappeared",
      "description": "brief explanation of the trend"
    }
  ],
  "recommendations": ["actionable recommendation 1", "actionable recommendation 2"],
  "weekly_comparison": "How this week compares to recent weeks"
}

Focus on:
- Overall productivity patterns and changes
- Category/theme trends over time
- Workload distribution changes
- Areas of growing or declining focus
- Actionable insights for improvement"#;

const BASELINE_SYSTEM_PROMPT: &str = r#"Analyze this week's completed tasks and provide initial insights.

Your response must be valid JSON with this structure:
{
  "overall_summary": "Brief overview of this week's accomplishments",
  "productivity_trend": "stable",
  "category_trends": [
    {
      "category": "category name",
      "trend": "new",
      "description": "brief description"
    }
  ],
  "recommendations": ["recommendation 1", "recommendation 2"],
  "weekly_comparison": "Baseline week - no historical comparison available"
}"#;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Deserialize, Debug)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Claude's summary of one business week of completed tasks.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TaskSummary {
    pub week_of: NaiveDate,
    pub completed_tasks: usize,
    pub summary: String,
    pub key_categories: Vec<String>,
    pub productivity_trends: String,
}

/// Cross-week trend analysis.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrendAnalysis {
    #[serde(default)]
    pub overall_summary: String,
    #[serde(default)]
    pub productivity_trend: String,
    #[serde(default)]
    pub category_trends: Vec<CategoryTrend>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub weekly_comparison: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CategoryTrend {
    pub category: String,
    pub trend: String,
    #[serde(default)]
    pub description: String,
}

/// Claude API client.
#[derive(Debug)]
pub struct Claude {
    client: Client,
    config: ClaudeConfig,
    api_key: String,
}

impl Claude {
    pub fn new(config: &ClaudeConfig, api_key: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            config: config.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// Resolves the API key and validates it with a minimal probe request.
    pub async fn connect(config: &ClaudeConfig) -> Result<Self> {
        let token = Token::new(SERVICE, ENV_KEY, SECRET_FILE, "Enter your Claude API key");
        let claude = Self::new(config, &token.resolve()?)?;

        msg_print!(Message::ValidatingToken(SERVICE.to_string()));
        if let Err(e) = claude.validate_key().await {
            token.invalidate()?;
            msg_error!(Message::TokenValidationFailed(SERVICE.to_string()));
            return Err(e);
        }
        msg_success!(Message::TokenValidated(SERVICE.to_string()));

        Ok(claude)
    }

    pub async fn validate_key(&self) -> Result<()> {
        let messages = vec![ChatMessage::user("Hello")];
        self.send_message(messages, None, VALIDATE_MAX_TOKENS).await.map(|_| ())
    }

    /// Summarizes one business week of completed tasks.
    ///
    /// An empty task list produces a fixed summary without an API call.
    pub async fn summarize_tasks(&self, tasks: &[Task], week: &BusinessWeek) -> Result<TaskSummary> {
        if tasks.is_empty() {
            return Ok(TaskSummary {
                week_of: week.week_of(),
                completed_tasks: tasks.len(),
                summary: "No tasks completed this week.".to_string(),
                key_categories: Vec::new(),
                productivity_trends: String::new(),
            });
        }

        let task_list = tasks.iter().map(task_line).collect::<Vec<_>>().join("\n");
        let user_prompt = format!(
            "Analyze these {} completed tasks from the week of {}:\n\n{}\n\nProvide a JSON summary focusing on key themes, accomplishments, and productivity patterns.",
            tasks.len(),
            week.week_of().format("%B %-d, %Y"),
            task_list
        );

        let messages = vec![ChatMessage::user(&user_prompt)];
        let response = self.send_message(messages, Some(SUMMARY_SYSTEM_PROMPT), SUMMARY_MAX_TOKENS).await?;

        #[derive(Deserialize)]
        struct SummaryResult {
            #[serde(default)]
            summary: String,
            #[serde(default)]
            key_categories: Vec<String>,
            #[serde(default)]
            productivity_trends: String,
        }

        let result: SummaryResult = serde_json::from_str(&response).map_err(|_| msg_error_anyhow!(Message::SummaryParseFailed))?;

        Ok(TaskSummary {
            week_of: week.week_of(),
            completed_tasks: tasks.len(),
            summary: result.summary,
            key_categories: result.key_categories,
            productivity_trends: result.productivity_trends,
        })
    }

    /// Analyzes trends across the current week and historical summaries.
    ///
    /// Without historical summaries a baseline analysis of the current week
    /// is produced instead; without tasks either, a fixed result comes back
    /// and no API call is made.
    pub async fn analyze_trends(&self, current_tasks: &[Task], historical: &[TaskSummary]) -> Result<TrendAnalysis> {
        if historical.is_empty() {
            return self.baseline_analysis(current_tasks).await;
        }

        let mut current_summary = format!(
            "CURRENT WEEK ({}): {} tasks completed",
            BusinessWeek::current().week_of().format("%b %-d"),
            current_tasks.len()
        );
        if !current_tasks.is_empty() {
            let task_list = current_tasks.iter().map(|t| format!("- {}", t.content)).collect::<Vec<_>>().join("\n");
            current_summary.push_str("\nTasks:\n");
            current_summary.push_str(&task_list);
        }

        let historical_data = historical
            .iter()
            .map(|summary| {
                let categories = match summary.key_categories.is_empty() {
                    true => "none".to_string(),
                    false => summary.key_categories.join(", "),
                };
                format!(
                    "Week of {}: {} tasks, Categories: {}\nSummary: {}",
                    summary.week_of.format("%b %-d"),
                    summary.completed_tasks,
                    categories,
                    summary.summary
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let user_prompt = format!(
            "{}\n\nHISTORICAL WEEKS:\n{}\n\nAnalyze trends across these weeks and provide insights for productivity optimization.",
            current_summary, historical_data
        );

        let messages = vec![ChatMessage::user(&user_prompt)];
        let response = self.send_message(messages, Some(TRENDS_SYSTEM_PROMPT), TRENDS_MAX_TOKENS).await?;

        serde_json::from_str(&response).map_err(|_| msg_error_anyhow!(Message::SummaryParseFailed))
    }

    async fn baseline_analysis(&self, current_tasks: &[Task]) -> Result<TrendAnalysis> {
        if current_tasks.is_empty() {
            return Ok(TrendAnalysis {
                overall_summary: "No tasks completed this week.".to_string(),
                productivity_trend: "stable".to_string(),
                category_trends: Vec::new(),
                recommendations: vec![
                    "Consider setting up weekly task goals".to_string(),
                    "Review task planning process".to_string(),
                ],
                weekly_comparison: "No historical data available for comparison.".to_string(),
            });
        }

        let task_list = current_tasks.iter().map(|t| format!("- {}", t.content)).collect::<Vec<_>>().join("\n");
        let user_prompt = format!(
            "This week's {} completed tasks:\n{}\n\nProvide initial analysis for tracking future trends.",
            current_tasks.len(),
            task_list
        );

        let messages = vec![ChatMessage::user(&user_prompt)];
        let response = self.send_message(messages, Some(BASELINE_SYSTEM_PROMPT), SUMMARY_MAX_TOKENS).await?;

        serde_json::from_str(&response).map_err(|_| msg_error_anyhow!(Message::SummaryParseFailed))
    }

    /// Sends one message exchange and returns the first text block.
    async fn send_message(&self, messages: Vec<ChatMessage>, system: Option<&str>, max_tokens: u32) -> Result<String> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens,
            messages,
            system: system.map(str::to_string),
        };

        let res = self.post(MESSAGES_URL, &request).await?;
        let response = res.json::<MessagesResponse>().await?;

        match response.content.first() {
            Some(block) => Ok(block.text.clone()),
            None => Err(msg_error_anyhow!(Message::NoContentInResponse)),
        }
    }

    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.config.api_url, endpoint);
        let res = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(body)
            .send()
            .await?;

        let status = res.status();
        if status.is_client_error() || status.is_server_error() {
            // The API wraps failures in an error envelope; fall back to the
            // raw body when the shape is unexpected
            let message = res.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorEnvelope>(&message) {
                Ok(envelope) => envelope.error.message,
                Err(_) => message,
            };
            return Err(ApiError {
                service: SERVICE,
                status,
                message,
            }
            .into());
        }

        Ok(res)
    }
}

/// Formats one task as a prompt line, with its completion date when known.
fn task_line(task: &Task) -> String {
    let completed = task
        .completed_at
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|dt| dt.format("%a %b %-d").to_string());

    match completed {
        Some(date) => format!("- {} (completed {})", task.content, date),
        None => format!("- {}", task.content),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClaudeConfig {
    pub api_url: String,
    pub model: String,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            api_url: BASE_URL.to_string(),
            model: MODEL_HAIKU.to_string(),
        }
    }
}

impl ClaudeConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "claude".to_string(),
            name: "Claude".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        println!("Claude settings");
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the Claude API URL")
                .default(config.api_url)
                .interact_text()?,
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the Claude model")
                .default(config.model)
                .interact_text()?,
        })
    }
}
