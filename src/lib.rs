//! quickadd - natural language quick-add for task titles
//!
//! This crate detects due dates, `#labels` and priority markers in free-form
//! task text, reports their positions, and drives an accept/dismiss editing
//! session that turns them into a structured task draft.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QuickAddError;
