//! Display implementation for pomodo application messages.
//!
//! Central place for all user-facing text. Every [`Message`] variant maps
//! to one human-readable string here, keeping wording consistent across
//! commands and making the text easy to revise in one pass.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskUpdated(name) => format!("Task renamed to '{}'", name),
            Message::TaskDeleted => "Task deleted".to_string(),
            Message::TaskToggled { name, is_completed, time } => {
                if *is_completed {
                    format!("Task '{}' completed, time on task {}", name, time)
                } else {
                    format!("Task '{}' reopened, time on task {}", name, time)
                }
            }
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskNameEmpty => "Please provide a task name".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::NoTasksForToday => "No tasks for today".to_string(),
            Message::ActiveTaskSet(id) => format!("Task {} is now the active task", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigIntro => "Set up session durations".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptStudyMinutes => "Study duration (minutes)".to_string(),
            Message::PromptBreakMinutes => "Break duration (minutes)".to_string(),
            Message::InvalidDuration => "Duration must be greater than zero".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionStarted(period) => format!("{} session started", period),
            Message::SessionPaused(period) => format!("{} session paused", period),
            Message::SessionResumed(period) => format!("{} session resumed", period),
            Message::SessionFinished(period) => format!("{} session finished", period),
            Message::SessionReset(period) => format!("{} session reset", period),
            Message::ResetDeclined => "Session continues".to_string(),
            Message::ConfirmEndSession => "Are you sure you want to end the session? Timer will be reset.".to_string(),
            Message::DurationApplied(minutes) => format!("Duration set to {} minutes", minutes),
            Message::DurationWhileActive => "Duration can only change while the timer is idle".to_string(),
            Message::PeriodSwitched(period) => format!("Switched to {} period", period),
            Message::RunHelp => "Commands: s start/pause | r reset | d <min> duration | n <name> new task | l list \
                                 | a <id> activate | t <id> toggle | b switch period | q quit"
                .to_string(),
            Message::UnknownCommand(cmd) => format!("Unknown command '{}', try one of: s r d n l a t b q", cmd),

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("📊 Daily summary for {}", date),
        };
        write!(f, "{}", text)
    }
}
