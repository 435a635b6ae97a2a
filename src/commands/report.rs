use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Include every task instead of only today's.
    #[arg(long)]
    all: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let filter = if args.all { TaskFilter::All } else { TaskFilter::Today };
    let list = Tasks::new()?.fetch(filter)?;
    if list.is_empty() {
        msg_info!(Message::NoTasksForToday);
        return Ok(());
    }

    let date = Local::now().format("%Y-%m-%d").to_string();
    msg_print!(Message::ReportHeader(date), true);
    View::summary(&list)?;

    Ok(())
}
