//! Output paging.
//!
//! Output that does not fit on one screen is handed to an interactive pager
//! (`less -R` unless configured otherwise). Paging is best effort: when the
//! pager cannot be started the text is printed directly.

use std::io::{IsTerminal, Write};
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::terminal::TerminalMetrics;

pub const DEFAULT_PAGER: &str = "less -R";

/// Strip trailing newlines from formatted output.
pub fn trim_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

/// Whether `text` is taller than the screen (minus the prompt line).
pub fn needs_paging(text: &str, metrics: &TerminalMetrics) -> bool {
    text.split('\n').count() > metrics.rows.saturating_sub(1)
}

/// Print `text` to stdout, through `pager_command` when it would not fit on screen.
pub fn page(text: &str, metrics: &TerminalMetrics, pager_command: &str) {
    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    if let Err(e) = page_to(text, metrics, pager_command, is_tty, &mut stdout.lock()) {
        debug!("writing output failed: {}", e);
    }
}

/// Write `text` to `out`, or hand it to the pager instead.
///
/// # Arguments
///
/// * `is_tty` - whether `out` is an interactive terminal; the pager is only
///   used when it is and `text` is taller than the screen
/// * `out` - destination for direct printing, including the fallback when the
///   pager cannot be started
pub fn page_to<W: Write>(
    text: &str,
    metrics: &TerminalMetrics,
    pager_command: &str,
    is_tty: bool,
    out: &mut W,
) -> std::io::Result<()> {
    let text = trim_trailing_newlines(text);

    if is_tty && needs_paging(text, metrics) {
        match run_pager(text, pager_command) {
            Ok(()) => return Ok(()),
            Err(e) => warn!("pager `{}` unavailable, printing directly: {}", pager_command, e),
        }
    }

    writeln!(out, "{}", text)
}

fn run_pager(text: &str, pager_command: &str) -> std::io::Result<()> {
    let mut parts = pager_command.split_whitespace();
    let program = parts.next().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty pager command")
    })?;

    debug!("paging {} lines through {}", text.lines().count(), pager_command);

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // The user quitting early closes the pipe; that is not an error.
        if let Err(e) = writeln!(stdin, "{}", text) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                drop(stdin);
                let _ = child.wait();
                return Err(e);
            }
        }
    }

    child.wait()?;
    Ok(())
}
