// core/src/errors/dispatch_error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The first argument matched no registered command. Carries no payload;
    /// callers still hold the argument list if they need the name.
    #[error("no command executed")]
    UnrecognizedCommand,
}

/// True when `err` is the dispatcher's unrecognized-command sentinel.
pub fn is_unrecognized_command(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DispatchError>(),
        Some(DispatchError::UnrecognizedCommand)
    )
}
