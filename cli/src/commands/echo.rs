use std::io::Write;

use clap::{Arg, ArgAction};
use commander_core::{CommandDescriptor, Invocation};

pub fn command() -> CommandDescriptor {
    let options = clap::Command::new("echo")
        .about("Print the given words separated by spaces")
        .arg(
            Arg::new("no_newline")
                .short('n')
                .action(ArgAction::SetTrue)
                .help("Do not print the trailing newline"),
        )
        .arg(
            Arg::new("upper")
                .long("upper")
                .action(ArgAction::SetTrue)
                .help("Upper-case the output"),
        );

    CommandDescriptor::new("echo", "print arguments", Some(options), handle)
}

fn handle(inv: Invocation) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_echo(&mut out, &inv)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn render(inv: &Invocation) -> String {
    let mut line = inv.args().join(" ");
    if inv.get_flag("upper") {
        line = line.to_uppercase();
    }
    if !inv.get_flag("no_newline") {
        line.push('\n');
    }
    line
}

fn write_echo<W: Write>(out: &mut W, inv: &Invocation) -> std::io::Result<()> {
    out.write_all(render(inv).as_bytes())
}
