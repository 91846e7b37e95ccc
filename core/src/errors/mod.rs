pub mod dispatch_error;

pub use dispatch_error::{is_unrecognized_command, DispatchError};
