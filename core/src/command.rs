//! Command descriptors and the factories that build them.
//!
//! A descriptor bundles everything the dispatcher needs for one verb: the
//! name it is selected by, a one-line description for help output, an
//! optional `clap::Command` describing its flags, and the handler to run.

use std::fmt;

use clap::ArgMatches;

use crate::options::ParseErrorPolicy;

/// Handler run when its command is selected.
pub type Handler = Box<dyn FnOnce(Invocation) -> anyhow::Result<()>>;

/// Deferred constructor for a descriptor. Any `FnOnce() -> CommandDescriptor`
/// is accepted by [`crate::execute`]; this alias covers plain functions.
pub type CommandFactory = fn() -> CommandDescriptor;

/// What a handler receives once its flags have been parsed.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Arguments left over after option parsing, in their original order.
    pub args: Vec<String>,
    /// Parsed option values. `None` when the command has no option parser.
    pub matches: Option<ArgMatches>,
}

impl Invocation {
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn matches(&self) -> Option<&ArgMatches> {
        self.matches.as_ref()
    }

    /// Value of a flag with a single value, if the command has options and the
    /// flag was given or has a default.
    pub fn get_one<T>(&self, id: &str) -> Option<&T>
    where
        T: std::any::Any + Clone + Send + Sync + 'static,
    {
        self.matches()
            .and_then(|m| m.try_get_one::<T>(id).ok().flatten())
    }

    /// State of a boolean (`ArgAction::SetTrue`) flag. False when absent.
    pub fn get_flag(&self, id: &str) -> bool {
        self.get_one::<bool>(id).copied().unwrap_or(false)
    }
}

pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub options: Option<clap::Command>,
    pub handler: Handler,
    pub on_parse_error: ParseErrorPolicy,
}

impl CommandDescriptor {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        options: Option<clap::Command>,
        handler: F,
    ) -> Self
    where
        F: FnOnce(Invocation) -> anyhow::Result<()> + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            options,
            handler: Box::new(handler),
            on_parse_error: ParseErrorPolicy::default(),
        }
    }

    pub fn with_parse_error_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.on_parse_error = policy;
        self
    }

    /// Registry key: the name folded to lower case.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("has_options", &self.options.is_some())
            .field("on_parse_error", &self.on_parse_error)
            .finish_non_exhaustive()
    }
}
