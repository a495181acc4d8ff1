//! INI text output.
//!
//! Top-level entries come first, then each section as a `[name]` header
//! followed by its entries. No escaping is applied, so keys containing `=` or
//! values containing newlines will not read back the same.

use std::fmt;
use std::io::{Cursor, Read, Write};

use tracing::warn;

use crate::domain::error::IniError;
use crate::domain::store::{ConfigStore, Entries};

impl ConfigStore {
    /// Write the whole store to `writer`, stopping at the first failure.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), IniError> {
        write_entries(&mut writer, self.entries())?;
        for (name, section) in self.sections() {
            writeln!(writer, "[{name}]").map_err(IniError::Write)?;
            write_entries(&mut writer, section.iter())?;
        }
        writer.flush().map_err(IniError::Write)
    }

    /// Best-effort rendering: whatever was written before a failure, with the
    /// cursor rewound to the start.
    pub fn to_stream(&self) -> Cursor<Vec<u8>> {
        let mut buffer = Vec::new();
        if let Err(err) = self.write_to(&mut buffer) {
            warn!(%err, written = buffer.len(), "config serialization stopped early");
        }
        Cursor::new(buffer)
    }
}

fn write_entries<W: Write>(writer: &mut W, entries: Entries<'_>) -> Result<(), IniError> {
    for (key, value) in entries {
        writeln!(writer, "{key}={value}").map_err(IniError::Write)?;
    }
    Ok(())
}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        if let Err(err) = self.to_stream().read_to_string(&mut text) {
            warn!(%err, "config is not valid text");
            return Ok(());
        }
        f.write_str(&text)
    }
}
