pub mod init;
pub mod report;
pub mod run;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure study and break durations")]
    Init(init::InitArgs),
    #[command(about = "Manage the task list")]
    Task(task::TaskArgs),
    #[command(about = "Run an interactive study session")]
    Run(run::RunArgs),
    #[command(about = "Show accumulated task time for today")]
    Report(report::ReportArgs),
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
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Run(args) => run::cmd(args).await,
            Commands::Report(args) => report::cmd(args),
        }
    }
}
