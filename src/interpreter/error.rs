//! # Command Errors
//!
//! Failures raised while interpreting a line. None of them escape the
//! interpreter: each one is converted into an `error` result for the
//! session to display.

use thiserror::Error;

use super::result::CommandResult;
use crate::metadata::FetchError;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Wrong arity or a value outside the accepted set. Detected locally,
    /// never touches the network.
    #[error("{0}")]
    Usage(&'static str),

    #[error("Command not found: {0}. Type 'help' or 'yardım' for available commands. (Komut bulunamadı)")]
    UnknownCommand(String),

    #[error("Failed to fetch data. (Veri çekilemedi.)")]
    Fetch(#[source] FetchError),

    #[error("Failed to fetch details. (Detaylar alınamadı.)")]
    Details(#[source] FetchError),
}

impl From<CommandError> for CommandResult {
    fn from(err: CommandError) -> Self {
        CommandResult::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_message_should_name_the_token() {
        let result: CommandResult = CommandError::UnknownCommand("foobar".to_string()).into();
        match result {
            CommandResult::Error { content } => {
                assert!(content.contains("foobar"));
                assert!(content.contains("help"));
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_error_should_hide_transport_details_from_the_user() {
        let err = CommandError::Fetch(FetchError::Timeout {
            path: "movie/upcoming".to_string(),
        });
        assert_eq!(err.to_string(), "Failed to fetch data. (Veri çekilemedi.)");
        assert!(std::error::Error::source(&err).is_some());
    }
}
