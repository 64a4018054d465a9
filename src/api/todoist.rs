//! Todoist REST API client.
//!
//! Wraps the Todoist v1 API for project, task, and completed-task queries.
//! The client keeps the list of tracked projects resolved at startup and
//! aggregates completed tasks across them one request per project.

use super::{check_status, Token};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::week::BusinessWeek;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDateTime;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE: &str = "Todoist";
const BASE_URL: &str = "https://api.todoist.com/api/v1";
const ENV_TOKEN: &str = "TODOIST_API_TOKEN";
const SECRET_FILE: &str = ".todoist_secret";
const REQUEST_TIMEOUT_SECS: u64 = 30;

const PROJECTS_URL: &str = "projects";
const TASKS_URL: &str = "tasks";
const COMPLETED_URL: &str = "tasks/completed/by_completion_date";
const STATS_URL: &str = "tasks/completed/stats";

/// Timestamp format accepted by the completed-tasks query parameters.
const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A named grouping of tasks in Todoist.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_inbox_project: bool,
    #[serde(default)]
    pub url: String,
}

/// A Todoist task, open or completed.
///
/// Only the fields recap consumes are kept; the API returns many more.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub priority: i32,
    pub content: String,
    #[serde(default)]
    pub description: String,
}

/// Due date details attached to a task.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Due {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Completion statistics, used as the token validation probe.
#[derive(Debug, Deserialize)]
pub struct ProductivityStats {
    #[serde(default)]
    pub completed_count: u64,
}

/// Query options for task endpoints.
#[derive(Debug, Default, Clone)]
pub struct QueryOpts {
    pub project_id: Option<String>,
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
struct ResultsResponse<T> {
    results: Vec<T>,
}

#[derive(Deserialize)]
struct ItemsResponse<T> {
    items: Vec<T>,
}

/// Todoist API client.
#[derive(Debug)]
pub struct Todoist {
    client: Client,
    config: TodoistConfig,
    token: String,
    projects: Vec<Project>,
}

impl Todoist {
    pub fn new(config: &TodoistConfig, token: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self {
            client,
            config: config.clone(),
            token: token.to_string(),
            projects: Vec::new(),
        })
    }

    /// Resolves the token, validates it, and loads the tracked projects.
    pub async fn connect(config: &TodoistConfig) -> Result<Self> {
        let token = Token::new(SERVICE, ENV_TOKEN, SECRET_FILE, "Enter your Todoist API token");
        let mut todoist = Self::new(config, &token.resolve()?)?;

        msg_print!(Message::ValidatingToken(SERVICE.to_string()));
        if let Err(e) = todoist.validate_token().await {
            // A cached token that no longer works must not be reused
            token.invalidate()?;
            msg_error!(Message::TokenValidationFailed(SERVICE.to_string()));
            return Err(e);
        }
        msg_success!(Message::TokenValidated(SERVICE.to_string()));

        todoist.load_projects().await?;
        Ok(todoist)
    }

    /// Checks the token with a lightweight stats request.
    pub async fn validate_token(&self) -> Result<()> {
        self.productivity_stats().await.map(|_| ())
    }

    pub async fn productivity_stats(&self) -> Result<ProductivityStats> {
        let res = self.get(STATS_URL, &QueryOpts::default()).await?;
        Ok(res.json::<ProductivityStats>().await?)
    }

    /// Resolves the tracked project list from the configuration.
    ///
    /// An empty project filter means every project of the account.
    pub async fn load_projects(&mut self) -> Result<()> {
        self.projects = match self.config.projects.is_empty() {
            true => self.fetch_all_projects().await?,
            false => {
                let mut projects = Vec::with_capacity(self.config.projects.len());
                for project_id in &self.config.projects {
                    projects.push(self.fetch_project(project_id).await?);
                }
                projects
            }
        };
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    async fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        let res = self.get(PROJECTS_URL, &QueryOpts::default()).await?;
        Ok(res.json::<ResultsResponse<Project>>().await?.results)
    }

    async fn fetch_project(&self, project_id: &str) -> Result<Project> {
        let endpoint = format!("{}/{}", PROJECTS_URL, project_id);
        let res = self.get(&endpoint, &QueryOpts::default()).await?;
        Ok(res.json::<Project>().await?)
    }

    /// Fetches open tasks for one project.
    pub async fn open_tasks(&self, project_id: &str) -> Result<Vec<Task>> {
        let opts = QueryOpts {
            project_id: Some(project_id.to_string()),
            ..Default::default()
        };
        let res = self.get(TASKS_URL, &opts).await?;
        Ok(res.json::<ResultsResponse<Task>>().await?.results)
    }

    /// Fetches open tasks across all tracked projects.
    pub async fn all_open_tasks(&self) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for project in &self.projects {
            tasks.extend(self.open_tasks(&project.id).await?);
        }
        Ok(tasks)
    }

    /// Fetches completed tasks by completion date.
    pub async fn completed_tasks(&self, opts: &QueryOpts) -> Result<Vec<Task>> {
        let res = self.get(COMPLETED_URL, opts).await?;
        Ok(res.json::<ItemsResponse<Task>>().await?.items)
    }

    /// Aggregates completed tasks across all tracked projects for a window.
    pub async fn completed_in_window(&self, since: NaiveDateTime, until: NaiveDateTime) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for project in &self.projects {
            let opts = QueryOpts {
                project_id: Some(project.id.clone()),
                since: Some(since),
                until: Some(until),
                limit: None,
            };
            tasks.extend(self.completed_tasks(&opts).await?);
        }
        Ok(tasks)
    }

    /// Completed tasks for one business week.
    pub async fn completed_for_week(&self, week: &BusinessWeek) -> Result<Vec<Task>> {
        self.completed_in_window(week.start, week.end).await
    }

    /// Completed tasks for the current business week, Monday through now.
    pub async fn completed_for_current_week(&self) -> Result<(BusinessWeek, Vec<Task>)> {
        let week = BusinessWeek::current_to_date();
        let tasks = self.completed_for_week(&week).await?;
        Ok((week, tasks))
    }

    /// Completed tasks for the n previous business weeks.
    ///
    /// Weeks come back in chronological order, oldest first.
    pub async fn completed_for_weeks_back(&self, n: usize) -> Result<Vec<(BusinessWeek, Vec<Task>)>> {
        let weeks = BusinessWeek::weeks_back(n);
        let mut result = Vec::with_capacity(weeks.len());
        for week in weeks {
            let tasks = self.completed_for_week(&week).await?;
            result.push((week, tasks));
        }
        Ok(result)
    }

    async fn get(&self, endpoint: &str, opts: &QueryOpts) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.config.api_url, endpoint);
        let mut query: Vec<(&str, String)> = Vec::new();

        if let Some(project_id) = &opts.project_id {
            query.push(("project_id", project_id.clone()));
        }
        if let Some(since) = &opts.since {
            query.push(("since", since.format(QUERY_TIME_FORMAT).to_string()));
        }
        if let Some(until) = &opts.until {
            query.push(("until", until.format(QUERY_TIME_FORMAT).to_string()));
        }
        if let Some(limit) = opts.limit {
            query.push(("limit", limit.to_string()));
        }

        let res = self.client.get(&url).bearer_auth(&self.token).query(&query).send().await?;
        check_status(SERVICE, res).await
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TodoistConfig {
    pub api_url: String,
    /// Tracked project IDs. Empty means every project of the account.
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Default for TodoistConfig {
    fn default() -> Self {
        Self {
            api_url: BASE_URL.to_string(),
            projects: Vec::new(),
        }
    }
}

impl TodoistConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "todoist".to_string(),
            name: "Todoist".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        println!("Todoist settings");
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the Todoist API URL")
            .default(config.api_url)
            .interact_text()?;
        let projects: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter tracked project IDs, comma separated (empty for all)")
            .default(config.projects.join(","))
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            api_url,
            projects: projects.split(',').map(str::trim).filter(|p| !p.is_empty()).map(str::to_string).collect(),
        })
    }
}
