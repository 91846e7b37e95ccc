use std::io::{self, Write};

use crate::command::{CommandDescriptor, Invocation};
use crate::errors::DispatchError;
use crate::help;
use crate::options::parse_with_policy;
use crate::registry::Registry;

const HELP_COMMAND: &str = "help";

/// Run the command named by the first element of `args`, writing any help
/// output to standard output. `None` uses the process arguments.
pub fn execute<I, F>(args: Option<Vec<String>>, factories: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> CommandDescriptor,
{
    execute_to(&mut io::stdout(), args, factories)
}

/// Same as [`execute`], with help output written to `out`.
///
/// Every factory is called exactly once. An empty argument list or a leading
/// `help` prints help and returns `Ok`. An unknown command name returns
/// [`DispatchError::UnrecognizedCommand`]. Otherwise the command's options are
/// parsed and the handler's result is returned as is.
pub fn execute_to<W, I, F>(
    out: &mut W,
    args: Option<Vec<String>>,
    factories: I,
) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = F>,
    F: FnOnce() -> CommandDescriptor,
{
    let args = args.unwrap_or_else(|| std::env::args().skip(1).collect());
    let mut registry = Registry::build(factories);
    tracing::debug!(commands = registry.len(), args = args.len(), "dispatching");

    let Some((first, rest)) = args.split_first() else {
        tracing::trace!("no arguments, listing commands");
        help::write_listing(out, &registry)?;
        out.flush()?;
        return Ok(());
    };

    if first.to_lowercase() == HELP_COMMAND {
        if rest.is_empty() {
            help::write_listing(out, &registry)?;
        } else {
            help::write_command_help(out, &registry, rest)?;
        }
        out.flush()?;
        return Ok(());
    }

    let Some(cmd) = registry.take(first) else {
        tracing::debug!(command = %first, "unrecognized command");
        return Err(DispatchError::UnrecognizedCommand.into());
    };

    run(cmd, rest)
}

fn run(cmd: CommandDescriptor, rest: &[String]) -> anyhow::Result<()> {
    let CommandDescriptor {
        name,
        options,
        handler,
        on_parse_error,
        ..
    } = cmd;

    let invocation = match options {
        Some(options) => {
            let (matches, args) = parse_with_policy(options, rest, on_parse_error)?;
            Invocation {
                args,
                matches: Some(matches),
            }
        }
        None => Invocation {
            args: rest.to_vec(),
            matches: None,
        },
    };

    tracing::debug!(command = %name, args = ?invocation.args, "running handler");
    let result = handler(invocation);
    if let Err(err) = &result {
        tracing::debug!(command = %name, error = %err, "handler failed");
    }
    result
}
