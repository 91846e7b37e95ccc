//! Sub-command dispatch for tools shaped like `tool verb --flags args...`.
//!
//! Callers hand [`execute`] an argument list and a set of command factories.
//! The first argument selects a command case-insensitively, its flags are
//! parsed with `clap`, and the remaining arguments go to its handler. `help`
//! (or no arguments at all) prints the command listing instead.

pub mod command;
pub mod dispatch;
pub mod errors;
pub mod help;
pub mod options;
pub mod registry;

pub use command::{CommandDescriptor, CommandFactory, Handler, Invocation};
pub use dispatch::{execute, execute_to};
pub use errors::{is_unrecognized_command, DispatchError};
pub use options::ParseErrorPolicy;
pub use registry::Registry;
