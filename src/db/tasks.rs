//! Database operations for the task list.
//!
//! Stores tasks with their completion flag and accumulated completion time.
//! The timer core only computes new completion-time values; this module owns
//! the actual writes. A toggle is not considered committed until
//! [`Tasks::set_completion`] returns success.

use super::db::Db;
use crate::libs::task::{Task, TaskFilter};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    created_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime')),
    name TEXT NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0,
    completion_time INTEGER NOT NULL DEFAULT 0
);";
const INSERT_TASK: &str = "INSERT INTO tasks (name, is_completed, completion_time) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, created_at, name, is_completed, completion_time FROM tasks";
const WHERE_TODAY: &str = "WHERE DATE(created_at) = DATE('now', 'localtime')";
const ORDER_BY_CREATED: &str = "ORDER BY created_at ASC, id ASC";
const SELECT_TASK_BY_ID: &str = "SELECT id, created_at, name, is_completed, completion_time FROM tasks WHERE id = ?1";
const UPDATE_TASK_NAME: &str = "UPDATE tasks SET name = ?1 WHERE id = ?2";
const UPDATE_TASK_COMPLETION: &str = "UPDATE tasks SET is_completed = ?1, completion_time = ?2 WHERE id = ?3";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    pub fn insert(&mut self, task: &Task) -> Result<()> {
        self.conn
            .execute(INSERT_TASK, params![task.name, task.is_completed, task.completion_time])?;

        Ok(())
    }

    /// Fetches tasks ordered by creation time.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let query = match filter {
            TaskFilter::All => format!("{} {}", SELECT_TASKS, ORDER_BY_CREATED),
            TaskFilter::Today => format!("{} {} {}", SELECT_TASKS, WHERE_TODAY, ORDER_BY_CREATED),
        };

        let mut stmt = self.conn.prepare(&query)?;
        let task_iter = stmt.query_map([], Self::map_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let task = self.conn.query_row(SELECT_TASK_BY_ID, params![id], Self::map_row).optional()?;
        Ok(task)
    }

    /// Renames a task. Returns the number of affected rows.
    pub fn rename(&mut self, id: i64, name: &str) -> Result<usize> {
        let updated = self.conn.execute(UPDATE_TASK_NAME, params![name, id])?;
        Ok(updated)
    }

    /// Writes a completion toggle through to the store.
    ///
    /// `completion_time` is the value computed by the attributor; the flag
    /// and the time persist together in one statement.
    pub fn set_completion(&mut self, id: i64, is_completed: bool, completion_time: i64) -> Result<usize> {
        let updated = self.conn.execute(UPDATE_TASK_COMPLETION, params![is_completed, completion_time, id])?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(deleted)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            created_at: row.get(1)?,
            name: row.get(2)?,
            is_completed: row.get(3)?,
            completion_time: row.get(4)?,
        })
    }
}
