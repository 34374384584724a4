//! Terminal I/O utilities for CLI.
//!
//! Provides user prompting for the confirmation gate.

use std::io::{self, BufRead, Write};

/// Prompt on stderr and read one trimmed line from stdin.
///
/// On a non-interactive stdin the read returns an empty string at EOF, which
/// callers treat the same as any non-affirmative answer.
pub fn prompt(message: &str) -> uuidshift::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).map_err(|e| {
        uuidshift::Error::internal_io(
            format!("Failed to read input: {}", e),
            Some("confirm".to_string()),
        )
    })?;

    Ok(line.trim().to_string())
}
