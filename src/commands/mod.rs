pub mod completed;
pub mod init;
pub mod summarize;
pub mod todos;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Fetch open tasks from tracked projects")]
    Todos,
    #[command(about = "Fetch tasks completed in the current business week")]
    Completed,
    #[command(about = "Summarize tasks from previous business weeks")]
    Summarize(summarize::SummarizeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        // Tokens may live in a local .env file
        let _ = dotenv();
        init_tracing();

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Todos => todos::cmd().await,
            Commands::Completed => completed::cmd().await,
            Commands::Summarize(args) => summarize::cmd(args).await,
        }
    }
}

/// Installs a tracing subscriber when debug mode is on.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}
