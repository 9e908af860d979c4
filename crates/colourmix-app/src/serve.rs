//! Line-oriented JSON request loop.

use colourmix_core::ipc::handle_line;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Answer one JSON request per input line until the input closes.
///
/// Blank lines are skipped. Returns the number of requests handled.
pub fn serve<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<usize> {
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(request = line, "handling request");
        writeln!(out, "{}", handle_line(line))?;
        out.flush()?;
        handled += 1;
    }
    info!(handled, "input closed");
    Ok(handled)
}
