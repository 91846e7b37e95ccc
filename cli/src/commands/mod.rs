pub mod echo;
pub mod repeat;
pub mod version;

use commander_core::CommandFactory;

/// Every command the `commander` binary exposes.
pub fn all() -> [CommandFactory; 3] {
    [echo::command, repeat::command, version::command]
}
