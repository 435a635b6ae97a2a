//! # Pomodo - Pomodoro study timer with a task list
//!
//! A command-line study timer that runs countdown sessions, tracks pauses,
//! and attributes elapsed time to tasks in a local database.
//!
//! ## Features
//!
//! - **Countdown Sessions**: Study and break periods with start/pause/reset
//! - **Elapsed-Time Attribution**: Completing a task credits it with the
//!   wall-clock time of its active session window, pause-aware
//! - **Task Management**: Create, rename, toggle, and delete tasks
//! - **Daily Summary**: Table of today's tasks with accumulated time
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pomodo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
