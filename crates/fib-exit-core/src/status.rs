//! Mapping of computed values onto process exit statuses.

use std::fmt;
use std::process::ExitCode;

/// The low 8 bits of a computed value, as handed back to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(u8);

impl ExitStatus {
    /// Reduce `value` modulo 256.
    pub fn from_value(value: u64) -> Self {
        let [low, ..] = value.to_le_bytes();
        Self(low)
    }

    /// The numeric status.
    pub fn code(self) -> u8 {
        self.0
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.0)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
