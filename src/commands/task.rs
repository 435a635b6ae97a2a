//! Task list management outside of a running session.
//!
//! Creating, renaming, toggling, and deleting tasks are plain store
//! mutations here. Toggling through this command happens with no session
//! attached, so completion time stays unchanged; time is only credited by
//! toggles inside `pomodo run`.

use crate::db::tasks::Tasks;
use crate::libs::formatter::format_millis_precise;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Name of a task to create.
    name: Option<String>,

    /// Show today's tasks.
    #[arg(short, long)]
    show: bool,

    /// Show every task, not only today's.
    #[arg(long)]
    all: bool,

    /// Rename a task by ID.
    #[arg(long, value_name = "ID")]
    edit: Option<i64>,

    /// Delete a task by ID.
    #[arg(long, value_name = "ID")]
    delete: Option<i64>,

    /// Toggle a task's completion by ID.
    #[arg(long, value_name = "ID")]
    toggle: Option<i64>,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    if let Some(name) = args.name {
        return create(&mut tasks, &name);
    }
    if let Some(id) = args.edit {
        return edit(&mut tasks, id);
    }
    if let Some(id) = args.delete {
        return delete(&mut tasks, id);
    }
    if let Some(id) = args.toggle {
        return toggle(&mut tasks, id);
    }

    let filter = if args.all { TaskFilter::All } else { TaskFilter::Today };
    let list = tasks.fetch(filter)?;
    View::tasks(&list)?;

    Ok(())
}

fn create(tasks: &mut Tasks, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskNameEmpty);
    }
    tasks.insert(&Task::new(name.trim()))?;
    msg_success!(Message::TaskCreated(name.trim().to_string()));

    Ok(())
}

fn edit(tasks: &mut Tasks, id: i64) -> Result<()> {
    let Some(task) = tasks.get_by_id(id)? else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Task name")
        .default(task.name.clone())
        .interact_text()?;
    if name.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskNameEmpty);
    }
    tasks.rename(id, name.trim())?;
    msg_success!(Message::TaskUpdated(name.trim().to_string()));

    Ok(())
}

fn delete(tasks: &mut Tasks, id: i64) -> Result<()> {
    let Some(task) = tasks.get_by_id(id)? else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
        .default(false)
        .interact()?;
    if confirmed {
        tasks.delete(id)?;
        msg_success!(Message::TaskDeleted);
    }

    Ok(())
}

fn toggle(tasks: &mut Tasks, id: i64) -> Result<()> {
    let Some(task) = tasks.get_by_id(id)? else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    // No session here, so accumulated time carries over unchanged.
    tasks.set_completion(id, !task.is_completed, task.completion_time)?;
    msg_success!(Message::TaskToggled {
        name: task.name.clone(),
        is_completed: !task.is_completed,
        time: format_millis_precise(task.completion_time),
    });

    Ok(())
}
