use super::formatter::format_millis;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DONE", "TIME"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.name,
                if task.is_completed { "x" } else { "" },
                format_millis(task.completion_time)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Task table with a total row of accumulated completion time.
    pub fn summary(tasks: &[Task]) -> Result<()> {
        Self::tasks(tasks)?;

        let total: i64 = tasks.iter().map(|t| t.completion_time).sum();
        let mut table = Table::new();
        table.add_row(row!["TOTAL", format_millis(total)]);
        table.printstd();

        Ok(())
    }
}
