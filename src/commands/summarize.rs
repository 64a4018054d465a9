//! Weekly summarization command.
//!
//! Gathers completed tasks for the requested number of previous business
//! weeks and asks Claude for one summary per week, oldest first. With
//! `--trends`, the current week's tasks and the collected summaries feed
//! a cross-week trend analysis.

use crate::{
    api::{Claude, Todoist},
    libs::{config::Config, messages::Message, view::View},
    msg_error_anyhow,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    #[arg(short, long, default_value_t = 1, help = "Number of weeks to look back for summarizing")]
    weeks: usize,
    #[arg(long, help = "Include cross-week trend analysis")]
    trends: bool,
}

pub async fn cmd(summarize_args: SummarizeArgs) -> Result<()> {
    let config = Config::read()?;
    let todoist_config = config.todoist.ok_or_else(|| msg_error_anyhow!(Message::TodoistNotConfigured))?;
    let claude_config = config.claude.ok_or_else(|| msg_error_anyhow!(Message::ClaudeNotConfigured))?;

    let todoist = Todoist::connect(&todoist_config).await?;
    let claude = Claude::connect(&claude_config).await?;

    let weekly_tasks = todoist.completed_for_weeks_back(summarize_args.weeks).await?;

    let mut summaries = Vec::with_capacity(weekly_tasks.len());
    for (week, tasks) in &weekly_tasks {
        let summary = claude.summarize_tasks(tasks, week).await?;
        View::summary(&summary)?;
        summaries.push(summary);
    }

    if summarize_args.trends {
        let (_, current_tasks) = todoist.completed_for_current_week().await?;
        let analysis = claude.analyze_trends(&current_tasks, &summaries).await?;
        View::trends(&analysis)?;
    }

    Ok(())
}
