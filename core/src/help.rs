use std::io::{self, Write};

use crate::options::render_usage;
use crate::registry::Registry;

pub const LISTING_HEADER: &str = "Commands are:";

/// `help` with no names: one line per registered command.
pub fn write_listing<W: Write>(out: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(out, "{LISTING_HEADER}")?;
    for cmd in registry.iter() {
        writeln!(out, "{}\t\t{}", cmd.name, cmd.description)?;
    }
    Ok(())
}

/// `help <name>...`: usage for each requested command. Unknown names get an
/// advisory line and do not stop the remaining names from being shown.
pub fn write_command_help<W, S>(
    out: &mut W,
    registry: &Registry,
    names: &[S],
) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for name in names {
        let name = name.as_ref();
        let Some(cmd) = registry.get(name) else {
            tracing::debug!(command = %name, "help requested for unknown command");
            writeln!(out, "Unrecognized sub-command: {name}")?;
            continue;
        };
        match cmd.options.as_ref() {
            Some(options) => write!(out, "{}", render_usage(options))?,
            None => writeln!(out, "{} takes no arguments: {}", cmd.name, cmd.description)?,
        }
    }
    Ok(())
}
