use std::collections::BTreeMap;

use crate::command::CommandDescriptor;

/// Per-call mapping from folded command name to descriptor.
///
/// Iteration is ordered by folded name. A registry is built for one dispatch
/// and dropped with it.
#[derive(Debug, Default)]
pub struct Registry {
    commands: BTreeMap<String, CommandDescriptor>,
}

impl Registry {
    /// Invoke every factory once and register what it returns. A later
    /// descriptor replaces an earlier one with the same folded name.
    pub fn build<I, F>(factories: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> CommandDescriptor,
    {
        let mut registry = Self::default();
        for factory in factories {
            registry.insert(factory());
        }
        registry
    }

    pub fn insert(&mut self, cmd: CommandDescriptor) {
        if let Some(prev) = self.commands.insert(cmd.key(), cmd) {
            tracing::debug!(command = %prev.name, "command replaced by later registration");
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(&name.to_lowercase())
    }

    /// Remove and return a command, handing its parser and handler to the caller.
    pub fn take(&mut self, name: &str) -> Option<CommandDescriptor> {
        self.commands.remove(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
