//! Completed task listing for the current business week.

use crate::{
    api::todoist::QueryOpts,
    api::Todoist,
    libs::{config::Config, messages::Message, view::View, week::BusinessWeek},
    msg_error, msg_error_anyhow, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let todoist_config = config.todoist.ok_or_else(|| msg_error_anyhow!(Message::TodoistNotConfigured))?;
    let todoist = Todoist::connect(&todoist_config).await?;

    let week = BusinessWeek::current_to_date();
    for project in todoist.projects() {
        let opts = QueryOpts {
            project_id: Some(project.id.clone()),
            since: Some(week.start),
            until: Some(week.end),
            limit: None,
        };

        // One failing project should not sink the rest
        let tasks = match todoist.completed_tasks(&opts).await {
            Ok(tasks) => tasks,
            Err(e) => {
                msg_error!(Message::ProjectFetchFailed(project.name.clone(), e.to_string()));
                continue;
            }
        };

        msg_print!(Message::CompletedTasksHeader(week.to_string(), project.name.clone()), true);
        match tasks.is_empty() {
            true => msg_print!(Message::NoCompletedTasks(week.to_string())),
            false => View::tasks(&tasks)?,
        }
    }

    Ok(())
}
