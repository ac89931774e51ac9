//! Opt-out marker detection.

use crate::error::{CutestError, Result};
use crate::types::TestFile;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Leading text that excludes a test file from the run.
pub const IGNORE_MARKER: &str = "// cutest-ignore";

/// Check whether a test file opts out of the run.
///
/// Leading whitespace is skipped and only as many bytes as the marker needs
/// are read after it.
pub fn is_ignored(test: &TestFile) -> Result<bool> {
    let file = File::open(test.path()).map_err(|source| CutestError::TestUnreadable {
        path: test.path().to_path_buf(),
        source,
    })?;
    starts_with_marker(BufReader::new(file)).map_err(|source| CutestError::TestUnreadable {
        path: test.path().to_path_buf(),
        source,
    })
}

fn starts_with_marker<R: BufRead>(mut reader: R) -> std::io::Result<bool> {
    // Bytes read but not yet consumed; may end in a partial UTF-8 sequence.
    let mut pending = Vec::new();
    let start = loop {
        let buf = reader.fill_buf()?;
        let eof = buf.is_empty();
        let len = buf.len();
        pending.extend_from_slice(buf);
        reader.consume(len);

        match scan_space(&pending) {
            Scan::Content(at) => break at,
            Scan::AllSpace(_) if eof => return Ok(false),
            Scan::AllSpace(spaces) => {
                pending.drain(..spaces);
            }
        }
    };
    pending.drain(..start);

    let marker = IGNORE_MARKER.as_bytes();
    if pending.len() < marker.len() {
        let missing = (marker.len() - pending.len()) as u64;
        reader.take(missing).read_to_end(&mut pending)?;
    }
    Ok(pending.starts_with(marker))
}

enum Scan {
    /// Content (or an undecodable byte) starts at this offset.
    Content(usize),
    /// Every complete character is whitespace; this many bytes of it.
    AllSpace(usize),
}

fn scan_space(bytes: &[u8]) -> Scan {
    let (text, invalid_at) = match std::str::from_utf8(bytes) {
        Ok(text) => (text, None),
        Err(e) => {
            let valid = e.valid_up_to();
            let text = std::str::from_utf8(&bytes[..valid]).unwrap_or_default();
            // `error_len` is None for a sequence cut off by the buffer end.
            (text, e.error_len().map(|_| valid))
        }
    };
    match text.char_indices().find(|&(_, c)| !is_space(c)) {
        Some((at, _)) => Scan::Content(at),
        None => match invalid_at {
            Some(at) => Scan::Content(at),
            None => Scan::AllSpace(text.len()),
        },
    }
}

// Unicode whitespace plus the ASCII separators U+001C..U+001F, matching
// Python's `str.isspace`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
