//! Feature implementations for quickadd.
//!
//! - Natural language parsing of quick-add input
//! - Shell completions

pub mod nlp;
pub mod shell;
