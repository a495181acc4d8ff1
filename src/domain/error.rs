//! Error types for stream-level failures.
//!
//! Structural anomalies in the text (missing `=`, stray brackets) are never
//! errors. Only the underlying reader or writer can fail, and the best-effort
//! entry points convert these into defaults before they reach a caller.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<&IniError> for std::process::ExitCode {
    fn from(err: &IniError) -> Self {
        let code: u8 = match err {
            IniError::Read { .. } | IniError::Write(_) => 1,
            IniError::Open { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
