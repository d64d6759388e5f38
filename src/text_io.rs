//! File helpers for the command-line front end.
//!
//! Input files are read as one logical line: physical lines are joined with
//! a single space and the final line terminator is dropped. Output is written
//! verbatim.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;

/// Reads every line from `reader` and joins them with single spaces.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. No trailing separator is
/// emitted, and an empty reader yields an empty string.
///
/// # Errors
/// Propagates read errors; invalid UTF-8 surfaces as
/// [`io::ErrorKind::InvalidData`].
///
/// # Examples
///
/// ```
/// use transposition::text_io::join_lines;
///
/// let joined = join_lines("first line\nsecond line\n".as_bytes()).unwrap();
/// assert_eq!(joined, "first line second line");
/// ```
pub fn join_lines<R: Read>(mut reader: R) -> io::Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    let mut joined = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                // terminator of the last line emits nothing
                if chars.peek().is_some() {
                    joined.push(' ');
                }
            }
            _ => joined.push(ch),
        }
    }
    Ok(joined)
}

/// Reads the file at `path` into a single space-joined string.
///
/// # Errors
/// Fails if the file cannot be opened or read, or is not valid UTF-8.
pub fn read_text(path: &Path) -> io::Result<String> {
    let file = fs::File::open(path)?;
    let text = join_lines(BufReader::new(file))?;
    debug!("read {} chars from {}", text.chars().count(), path.display());
    Ok(text)
}

/// Writes `data` to `path` verbatim, creating or truncating the file.
///
/// # Errors
/// Fails if the file cannot be created or written.
pub fn write_text(path: &Path, data: &str) -> io::Result<()> {
    fs::write(path, data)?;
    debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
