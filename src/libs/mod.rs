//! Core library modules for the pomodo application.
//!
//! The timer core lives here: the countdown engine, the session state
//! machine, and the elapsed-time attributor, together with the supporting
//! clock abstraction, configuration, formatting, and messaging utilities.

pub mod attribution;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod session;
pub mod task;
pub mod view;
