//! # Recap - Weekly Task Recap
//!
//! A command-line utility that collects Todoist tasks, groups them into
//! business weeks, and produces Claude-powered summaries and trends.
//!
//! ## Features
//!
//! - **Task Retrieval**: Fetch open and completed tasks from Todoist projects
//! - **Business Weeks**: Calendar-aligned Monday-Sunday week windows
//! - **AI Summaries**: Weekly task summaries generated by the Claude API
//! - **Trend Analysis**: Cross-week productivity trend reports
//! - **Interactive Setup**: Guided configuration for tracked projects
//!
//! ## Usage
//!
//! ```rust,no_run
//! use recap::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
