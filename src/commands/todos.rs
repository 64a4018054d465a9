//! Open task listing command.

use crate::{
    api::Todoist,
    libs::{config::Config, messages::Message, view::View},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let todoist_config = config.todoist.ok_or_else(|| msg_error_anyhow!(Message::TodoistNotConfigured))?;
    let todoist = Todoist::connect(&todoist_config).await?;

    let tasks = todoist.all_open_tasks().await?;
    if tasks.is_empty() {
        msg_print!(Message::NoOpenTasks);
        return Ok(());
    }

    msg_print!(Message::OpenTasksHeader, true);
    View::tasks(&tasks)?;

    Ok(())
}
