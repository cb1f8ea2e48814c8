//! Shell integration.
//!
//! This module provides shell completions generation.

pub mod completions;

pub use completions::{completion_install_instructions, generate_completions, shell_from_str};
