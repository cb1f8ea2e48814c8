//! Interactive editing session command.
//!
//! Reads lines from stdin: plain lines replace the input text, `:`-prefixed
//! lines accept or dismiss suggestions. The current suggestions are printed
//! after every line.

use std::io::{BufRead, Write};

use crate::cli::args::{OutputFormat, SessionArgs};
use crate::config::Config;
use crate::core::{Clock, FixedClock};
use crate::error::QuickAddError;
use crate::features::nlp::{EditSession, Suggestion};
use crate::output::{format_draft, format_suggestions};

use super::{known_labels, reference_date};

/// One line of session input.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Text(&'a str),
    Accept(usize),
    Dismiss(usize),
    Submit,
    Clear,
    Quit,
}

impl<'a> SessionCommand<'a> {
    fn parse(line: &'a str) -> Result<Self, QuickAddError> {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Ok(Self::Text(line));
        };

        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let mut index = || {
            words
                .next()
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| QuickAddError::InvalidInput(format!("usage: :{name} N")))
        };

        match name {
            "accept" | "a" => index().map(Self::Accept),
            "dismiss" | "d" => index().map(Self::Dismiss),
            "submit" | "s" => Ok(Self::Submit),
            "clear" | "c" => Ok(Self::Clear),
            "quit" | "q" => Ok(Self::Quit),
            other => Err(QuickAddError::InvalidInput(format!("unknown command: :{other}"))),
        }
    }
}

/// Execute the session command.
///
/// Errors from individual lines (bad command, stale suggestion) are reported
/// inline and the session continues.
///
/// # Errors
///
/// Returns an error if `--today` is not a date, or reading input or writing
/// output fails.
pub fn session<R: BufRead, W: Write>(
    args: &SessionArgs,
    config: &Config,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<(), QuickAddError> {
    let today = reference_date(args.today.as_deref())?;
    let mut session = EditSession::with_clock(known_labels(config, &args.labels), FixedClock(today));

    for line in input.lines() {
        let line = line?;
        match run_line(&mut session, &line, format) {
            Ok(Some(output)) => writeln!(out, "{output}")?,
            Ok(None) => break,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    Ok(())
}

/// Apply one line; `None` means the session should end.
fn run_line<C: Clock>(
    session: &mut EditSession<C>,
    line: &str,
    format: OutputFormat,
) -> Result<Option<String>, QuickAddError> {
    let nth = |session: &EditSession<C>, index: usize| -> Result<Suggestion, QuickAddError> {
        session
            .suggestions()
            .into_iter()
            .nth(index)
            .ok_or_else(|| QuickAddError::InvalidInput(format!("no suggestion {index}")))
    };

    match SessionCommand::parse(line)? {
        SessionCommand::Quit => return Ok(None),
        SessionCommand::Submit => {
            let draft = session.submit();
            return format_draft(&draft, format).map(Some);
        },
        SessionCommand::Clear => session.clear(),
        SessionCommand::Text(text) => session.set_text(text),
        SessionCommand::Accept(index) => {
            let suggestion = nth(session, index)?;
            session.accept(&suggestion)?;
        },
        SessionCommand::Dismiss(index) => {
            let suggestion = nth(session, index)?;
            session.dismiss(&suggestion);
        },
    }

    format_suggestions(session.text(), &session.suggestions(), format).map(Some)
}
