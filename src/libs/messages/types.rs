#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted,
    TaskToggled { name: String, is_completed: bool, time: String },
    TaskNotFoundWithId(i64),
    TaskNameEmpty,
    ConfirmDeleteTask(String),
    NoTasksForToday,
    ActiveTaskSet(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigIntro,
    ConfigSaved,
    ConfigParseError,
    PromptStudyMinutes,
    PromptBreakMinutes,
    InvalidDuration,

    // === SESSION MESSAGES ===
    SessionStarted(String),
    SessionPaused(String),
    SessionResumed(String),
    SessionFinished(String),
    SessionReset(String),
    ResetDeclined,
    ConfirmEndSession,
    DurationApplied(u32),
    DurationWhileActive,
    PeriodSwitched(String),
    RunHelp,
    UnknownCommand(String),

    // === REPORT MESSAGES ===
    ReportHeader(String),
}
