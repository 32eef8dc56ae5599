//! Per-download confirmation.
//!
//! With `--confirmation` the crawl asks before every GET; a declined target
//! stays claimed and is not offered again in the same run.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Decides whether `url` may be downloaded to `destination`.
pub trait Confirmer {
    fn confirm(&self, url: &str, destination: &Path) -> bool;
}

/// Asks on the terminal: `Download <url> to <path>? [y/N]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&self, url: &str, destination: &Path) -> bool {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout().lock();
        match ask(&mut input, &mut output, url, destination) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(url, error = %e, "confirmation prompt failed, skipping");
                false
            }
        }
    }
}

/// Writes the prompt to `output` and reads one answer line from `input`.
/// Anything but `y`/`yes` (any case) declines, including end of input.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    url: &str,
    destination: &Path,
) -> io::Result<bool> {
    write!(output, "Download {} to {}? [y/N] ", url, destination.display())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
