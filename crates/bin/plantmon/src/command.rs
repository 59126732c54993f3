//! Command-line arguments.
//!
//! ```text
//! plantmon                 print the plant report
//! plantmon toggle <index>  toggle a plant's irrigation switch, then report
//! plantmon stub            print an example card configuration
//! ```

use std::num::ParseIntError;

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Report,
    Toggle(usize),
    Stub,
}

impl Command {
    /// Parse arguments, program name excluded.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown subcommands, a missing or non-numeric
    /// plant index, and trailing arguments.
    pub fn parse<I>(args: I) -> Result<Self, CommandError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = match args.next().as_deref() {
            None | Some("report") => Self::Report,
            Some("stub") => Self::Stub,
            Some("toggle") => {
                let index = args.next().ok_or(CommandError::MissingIndex)?;
                Self::Toggle(index.parse().map_err(CommandError::InvalidIndex)?)
            }
            Some(other) => return Err(CommandError::Unknown(other.to_string())),
        };
        if let Some(extra) = args.next() {
            return Err(CommandError::Unexpected(extra));
        }
        Ok(command)
    }

    /// Whether the command reads `plantmon.toml` and the state snapshot.
    ///
    /// `stub` works anywhere, even without a valid configuration.
    #[must_use]
    pub fn requires_config(self) -> bool {
        !matches!(self, Self::Stub)
    }
}

/// Argument errors.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, expected report, toggle or stub")]
    Unknown(String),
    #[error("toggle requires a plant index")]
    MissingIndex,
    #[error("plant index must be a non-negative integer")]
    InvalidIndex(#[source] ParseIntError),
    #[error("unexpected argument {0:?}")]
    Unexpected(String),
}
