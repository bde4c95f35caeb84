//! Terminal collaborators — control sequences, geometry, and the output guard.
//!
//! Output requires a terminal that understands 24-bit foreground colors
//! (`ESC[38;2;R;G;Bm`) and can display the strip symbol. Neither can be
//! detected from here; terminals without them render garbage.

use std::io::Write;

/// Clear scrollback, home the cursor, clear the screen, hide the cursor.
pub const RESET_SCREEN: &str = "\x1B[3J\x1B[H\x1B[2J\x1B[?25l";

/// Move to row 6, column 1 — the line directly below the header.
pub const STRIP_ROW: &str = "\x1B[6;1H";

/// Clear from the cursor to the end of the line.
pub const CLEAR_TO_EOL: &str = "\x1B[0K";

/// Reset the color to the terminal default and show the cursor again.
pub const RESTORE: &str = "\x1B[m\x1B[?25h\n";

const DEFAULT_COLUMNS: u16 = 80;
const DEFAULT_ROWS: u16 = 24;

/// Terminal size as `(columns, rows)`.
///
/// Asks the OS first; when that fails (output is not a terminal), falls back
/// to `COLUMNS`/`LINES` from the environment and finally to 80×24.
pub fn terminal_size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (cols, rows),
        Ok(_) | Err(_) => {
            log::debug!("terminal size query unavailable, using environment");
            size_from_env(|key| std::env::var(key).ok())
        }
    }
}

/// Resolve `(columns, rows)` from `COLUMNS`/`LINES` via `lookup`, with 80×24
/// for anything missing or unparseable.
pub fn size_from_env(lookup: impl Fn(&str) -> Option<String>) -> (u16, u16) {
    let read = |key: &str, default: u16| {
        lookup(key)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(default)
    };
    (read("COLUMNS", DEFAULT_COLUMNS), read("LINES", DEFAULT_ROWS))
}

/// Scoped ownership of the terminal while the strip is being drawn.
///
/// Dropping the guard writes [`RESTORE`], so the color and cursor come back
/// on every exit path: normal return, `?` propagation, or interrupt.
pub struct OutputGuard<W: Write> {
    out: W,
}

impl<W: Write> OutputGuard<W> {
    pub fn new(out: W) -> Self {
        OutputGuard { out }
    }
}

impl<W: Write> Drop for OutputGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self
            .out
            .write_all(RESTORE.as_bytes())
            .and_then(|()| self.out.flush())
        {
            log::warn!("could not restore terminal: {e}");
        }
    }
}
