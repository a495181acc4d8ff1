//! Line-oriented INI parser.
//!
//! Each line is classified on its own; the only state carried between lines
//! is the current section. Lines that are not comments, headers or entries
//! are dropped without error.

use std::io::{self, BufRead};

use tracing::debug;

use crate::domain::error::IniError;
use crate::domain::store::ConfigStore;

const BOM: char = '\u{feff}';

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Header(&'a str),
    Entry { key: &'a str, value: &'a str },
    Ignored,
}

impl<'a> Line<'a> {
    /// Whitespace is significant everywhere: keys, values and section names
    /// are taken verbatim.
    pub fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            return Line::Blank;
        }
        if line.starts_with(';') {
            return Line::Comment;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return Line::Header(name);
        }
        match line.split_once('=') {
            Some((key, value)) => Line::Entry { key, value },
            None => Line::Ignored,
        }
    }
}

/// Split on `\n`, `\r\n` and a lone `\r`, decoding each line as UTF-8.
fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').flat_map(|chunk| {
        let pieces: Vec<io::Result<String>> = match chunk {
            Err(err) => vec![Err(err)],
            Ok(bytes) => {
                let mut parts: Vec<&[u8]> = bytes.split(|&b| b == b'\r').collect();
                // A trailing '\r' ends the line rather than starting an empty one.
                if bytes.last() == Some(&b'\r') {
                    parts.pop();
                }
                parts
                    .into_iter()
                    .map(|part| {
                        String::from_utf8(part.to_vec())
                            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
                    })
                    .collect()
            }
        };
        pieces
    })
}

/// Read every line of `reader` into `store`.
///
/// On error the store may hold the lines read so far; callers decide whether
/// to keep or discard them.
pub(crate) fn parse_into<R: BufRead>(reader: R, store: &mut ConfigStore) -> Result<(), IniError> {
    let mut section: Option<String> = None;

    for (index, line) in lines(reader).enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| IniError::Read {
            line: number,
            source,
        })?;
        let text = if index == 0 {
            line.strip_prefix(BOM).unwrap_or(line.as_str())
        } else {
            line.as_str()
        };

        match Line::classify(text) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => section = Some(name.to_string()),
            Line::Entry { key, value } => store.set_string(key, value, section.as_deref()),
            Line::Ignored => debug!(line = number, text, "ignoring line without '='"),
        }
    }

    Ok(())
}
