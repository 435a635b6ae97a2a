//! Interactive study session.
//!
//! Runs the foreground loop that owns one timer session per period (study
//! and break), drives the countdown from a one-per-second tick source, and
//! reads line commands from stdin. The tick source fires continuously but
//! the session machine only consumes ticks while running, so pausing
//! effectively disarms it.
//!
//! Toggling a task inside the loop routes through the session's attributor
//! and writes the computed completion time to the task store; the toggle is
//! only reported once that write succeeds.

use crate::db::tasks::Tasks;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::countdown::Tick;
use crate::libs::formatter::{format_clock, format_millis_precise};
use crate::libs::messages::Message;
use crate::libs::session::{ConfirmReset, Period, ResetOutcome, SessionState, TimerSession};
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Study duration in minutes, overriding the stored preference.
    #[arg(long = "study", value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    study_minutes: Option<u32>,

    /// Break duration in minutes, overriding the stored preference.
    #[arg(long = "break", value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    break_minutes: Option<u32>,
}

/// Confirmation port backed by an interactive prompt.
struct EndSessionPrompt;

impl ConfirmReset for EndSessionPrompt {
    fn confirm(&self) -> Result<bool> {
        println!();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmEndSession.to_string())
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}

/// One independent timer session per period, plus the configured durations
/// applied when a period is entered.
struct Sessions {
    study: TimerSession,
    brk: TimerSession,
    study_minutes: u32,
    break_minutes: u32,
}

impl Sessions {
    fn new(study_minutes: u32, break_minutes: u32) -> Self {
        Sessions {
            study: TimerSession::new(study_minutes),
            brk: TimerSession::new(break_minutes),
            study_minutes,
            break_minutes,
        }
    }

    fn get(&self, period: Period) -> &TimerSession {
        match period {
            Period::Study => &self.study,
            Period::Break => &self.brk,
        }
    }

    fn get_mut(&mut self, period: Period) -> &mut TimerSession {
        match period {
            Period::Study => &mut self.study,
            Period::Break => &mut self.brk,
        }
    }

    fn preferred_minutes(&self, period: Period) -> u32 {
        match period {
            Period::Study => self.study_minutes,
            Period::Break => self.break_minutes,
        }
    }
}

pub async fn cmd(args: RunArgs) -> Result<()> {
    let config = Config::read()?;
    let clock = SystemClock;
    let mut sessions = Sessions::new(
        args.study_minutes.unwrap_or(config.study_minutes),
        args.break_minutes.unwrap_or(config.break_minutes),
    );
    let mut period = Period::Study;
    // The active task and when it was activated, bounding its credit window.
    let mut active_task: Option<(i64, i64)> = None;
    let mut tasks = Tasks::new()?;

    msg_print!(Message::RunHelp, true);
    draw_clock(period, sessions.get(period))?;

    let mut ticker = interval(Duration::from_secs(1));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match sessions.get_mut(period).tick() {
                    Some(Tick::Counting) => draw_clock(period, sessions.get(period))?,
                    Some(Tick::Finished) => {
                        println!();
                        msg_success!(Message::SessionFinished(period.label().to_string()));
                        active_task = None;
                    }
                    Some(Tick::Spent) | None => {}
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_command(&line, &mut sessions, &mut period, &mut active_task, &mut tasks, &clock)? {
                            break;
                        }
                        draw_clock(period, sessions.get(period))?;
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

/// Dispatches one input line. Returns `false` when the loop should exit.
fn handle_command(
    line: &str,
    sessions: &mut Sessions,
    period: &mut Period,
    active_task: &mut Option<(i64, i64)>,
    tasks: &mut Tasks,
    clock: &dyn Clock,
) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(true);
    };
    let rest = parts.collect::<Vec<_>>().join(" ");

    match command {
        "s" => {
            let session = sessions.get_mut(*period);
            let message = match session.state() {
                SessionState::Running => Message::SessionPaused(period.label().to_string()),
                SessionState::Paused => Message::SessionResumed(period.label().to_string()),
                _ => Message::SessionStarted(period.label().to_string()),
            };
            session.toggle(clock);
            msg_debug!(format!("session state: {:?}", session.state()));
            println!();
            msg_info!(message);
        }
        "r" => {
            let session = sessions.get_mut(*period);
            match session.reset(&EndSessionPrompt)? {
                ResetOutcome::Reset => {
                    *active_task = None;
                    msg_info!(Message::SessionReset(period.label().to_string()));
                }
                ResetOutcome::Declined => msg_info!(Message::ResetDeclined),
            }
        }
        "d" => match rest.parse::<u32>() {
            Ok(minutes) if minutes > 0 => {
                let session = sessions.get_mut(*period);
                if session.configure_duration(minutes) {
                    msg_info!(Message::DurationApplied(minutes));
                } else {
                    msg_warning!(Message::DurationWhileActive);
                }
            }
            _ => msg_error!(Message::InvalidDuration),
        },
        "n" => {
            if rest.trim().is_empty() {
                msg_error!(Message::TaskNameEmpty);
            } else {
                tasks.insert(&Task::new(rest.trim()))?;
                msg_success!(Message::TaskCreated(rest.trim().to_string()));
            }
        }
        "l" => {
            println!();
            View::tasks(&tasks.fetch(TaskFilter::Today)?)?;
        }
        "a" => match rest.parse::<i64>() {
            Ok(id) => {
                if tasks.get_by_id(id)?.is_some() {
                    *active_task = Some((id, clock.now_ms()));
                    msg_info!(Message::ActiveTaskSet(id));
                } else {
                    msg_error!(Message::TaskNotFoundWithId(id));
                }
            }
            Err(_) => msg_error!(Message::UnknownCommand(line.to_string())),
        },
        "t" => match rest.parse::<i64>() {
            Ok(id) => toggle_task(id, sessions, *period, active_task, tasks, clock)?,
            Err(_) => msg_error!(Message::UnknownCommand(line.to_string())),
        },
        "b" => {
            let session = sessions.get_mut(*period);
            match session.reset(&EndSessionPrompt)? {
                ResetOutcome::Reset => {
                    *active_task = None;
                    *period = period.other();
                    // The entered session is idle here, so the preferred
                    // duration always applies.
                    let minutes = sessions.preferred_minutes(*period);
                    sessions.get_mut(*period).configure_duration(minutes);
                    msg_info!(Message::PeriodSwitched(period.label().to_string()));
                }
                ResetOutcome::Declined => msg_info!(Message::ResetDeclined),
            }
        }
        "q" => {
            let session = sessions.get_mut(*period);
            match session.reset(&EndSessionPrompt)? {
                ResetOutcome::Reset => return Ok(false),
                ResetOutcome::Declined => msg_info!(Message::ResetDeclined),
            }
        }
        _ => msg_error!(Message::UnknownCommand(command.to_string())),
    }

    Ok(true)
}

/// Toggles a task's completion and writes the attributed time through.
fn toggle_task(
    id: i64,
    sessions: &mut Sessions,
    period: Period,
    active_task: &Option<(i64, i64)>,
    tasks: &mut Tasks,
    clock: &dyn Clock,
) -> Result<()> {
    let Some(task) = tasks.get_by_id(id)? else {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    };

    let clicked_at = clock.now_ms();
    let activated_at = (*active_task).filter(|(task_id, _)| *task_id == id).map(|(_, at)| at);
    let session = sessions.get_mut(period);
    let completion_time = session.attribute_toggle(&task, clicked_at, period == Period::Break, activated_at);
    tasks.set_completion(id, !task.is_completed, completion_time)?;

    println!();
    msg_success!(Message::TaskToggled {
        name: task.name.clone(),
        is_completed: !task.is_completed,
        time: format_millis_precise(completion_time),
    });

    Ok(())
}

fn draw_clock(period: Period, session: &TimerSession) -> Result<()> {
    let countdown = session.countdown();
    print!("\r{} {}  ", period.label(), format_clock(countdown.minutes(), countdown.seconds()));
    io::stdout().flush()?;

    Ok(())
}
