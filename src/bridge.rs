//! Line-oriented JSON bridge between a front end and the reader session.
//!
//! Each input line is one `SessionCommand`; each output line is either the
//! resulting `SessionEvent` or a `BridgeError`. Blank lines are skipped.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::io::{BufRead, Write};
use textbook_core::{ReaderSession, SessionCommand};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeError {
    pub code: String,
    pub message: String,
}

fn bridge_error(code: &str, message: impl Into<String>) -> BridgeError {
    BridgeError {
        code: code.to_string(),
        message: message.into(),
    }
}

fn to_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        let fallback = bridge_error("serialize_failed", err.to_string());
        format!(
            r#"{{"code":"{}","message":{:?}}}"#,
            fallback.code, fallback.message
        )
    })
}

/// Handles one input line. Returns `None` for blank input.
pub fn handle_line(session: &mut ReaderSession, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<SessionCommand>(line) {
        Ok(command) => {
            debug!(action = command.action(), "Dispatching command");
            let event = session.apply_command(command, Utc::now());
            Some(to_line(&event))
        }
        Err(err) => {
            warn!("Rejected bridge input: {err}");
            Some(to_line(&bridge_error("invalid_command", err.to_string())))
        }
    }
}

/// Pumps commands from `input` until EOF. Returns the number of responses
/// written.
pub fn run_bridge<R: BufRead, W: Write>(
    session: &mut ReaderSession,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut responses = 0;
    for line in input.lines() {
        let line = line.context("Failed to read command line")?;
        if let Some(response) = handle_line(session, &line) {
            writeln!(output, "{response}").context("Failed to write response")?;
            output.flush().context("Failed to flush response")?;
            responses += 1;
        }
    }
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use textbook_core::Catalog;
    use textbook_core::config::AppConfig;

    fn build_test_session() -> ReaderSession {
        ReaderSession::new(Catalog::sample(), &AppConfig::default())
    }

    #[test]
    fn blank_lines_produce_no_response() {
        let mut session = build_test_session();
        assert_eq!(handle_line(&mut session, "   "), None);
    }

    #[test]
    fn invalid_input_yields_bridge_error() {
        let mut session = build_test_session();
        let response = handle_line(&mut session, r#"{"command":"teleport"}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["code"], "invalid_command");
        assert!(value["message"].as_str().is_some());
    }

    #[test]
    fn commands_stream_through_to_snapshots() {
        let mut session = build_test_session();
        let input = Cursor::new(
            [
                r#"{"command":"navigate_next"}"#,
                "",
                r#"{"command":"mark_section_complete","section_id":"s2-3"}"#,
                r#"{"command":"select_document","document_id":"cs-intro"}"#,
            ]
            .join("\n"),
        );
        let mut output = Vec::new();

        let written = run_bridge(&mut session, input, &mut output).unwrap();

        assert_eq!(written, 3);
        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines[0]["action"], "reader_navigate_next");
        assert_eq!(lines[0]["snapshot"]["content"]["section"]["id"], "s1-2");
        assert_eq!(lines[1]["snapshot"]["sidebar"]["chapters"][1]["progress"], 75);
        assert_eq!(lines[2]["snapshot"]["header"]["title"], "Introduction to Computer Science");
        assert_eq!(lines[2]["snapshot"]["content"]["state"], "reading");
    }
}
