//! Option parsing for a selected command, backed by `clap`.
//!
//! Flags are consumed from the front of the argument list. Parsing stops at
//! the first positional argument (or `--`); that argument and everything after
//! it are handed to the handler untouched. Option parsers therefore declare
//! flags only: a command with positionals of its own is rejected with
//! `ErrorKind::ArgumentConflict`.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches};

/// Positional that collects whatever the command's flags leave behind.
const REMAINING_ARGS: &str = "__commander_remaining_args";

const POSITIONAL_CONFLICT: &str =
    "option parsers may only declare flags; positional arguments are passed to the handler";

/// How a malformed flag list is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseErrorPolicy {
    /// Let clap print its diagnostic (or the requested `--help`) and terminate
    /// the process with clap's exit code.
    #[default]
    Exit,
    /// Hand the `clap::Error` back to the caller of `execute`; the handler is
    /// not run.
    Return,
}

fn has_positionals(cmd: &clap::Command) -> bool {
    cmd.get_positionals().next().is_some()
}

fn with_remaining_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        Arg::new(REMAINING_ARGS)
            .value_name("ARGS")
            .help("Arguments passed through to the command")
            .num_args(1..)
            .trailing_var_arg(true)
            .action(ArgAction::Append)
            .value_parser(value_parser!(String)),
    )
}

/// Parse `args` against `cmd`, returning the recognized options and the
/// remaining arguments. Takes `cmd` by value: a parser is used once.
pub fn parse_options(
    mut cmd: clap::Command,
    args: &[String],
) -> Result<(ArgMatches, Vec<String>), clap::Error> {
    if has_positionals(&cmd) {
        return Err(cmd.error(ErrorKind::ArgumentConflict, POSITIONAL_CONFLICT));
    }

    let cmd = with_remaining_args(cmd.no_binary_name(true));
    let mut matches = cmd.try_get_matches_from(args.iter())?;
    let rest = matches
        .try_remove_many::<String>(REMAINING_ARGS)
        .ok()
        .flatten()
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok((matches, rest))
}

/// Apply `policy` to the outcome of [`parse_options`].
pub(crate) fn parse_with_policy(
    cmd: clap::Command,
    args: &[String],
    policy: ParseErrorPolicy,
) -> anyhow::Result<(ArgMatches, Vec<String>)> {
    match parse_options(cmd, args) {
        Ok(parsed) => Ok(parsed),
        Err(err) => match policy {
            ParseErrorPolicy::Exit => err.exit(),
            ParseErrorPolicy::Return => Err(err.into()),
        },
    }
}

/// Rendered help for a command's options, as shown by `help <command>`,
/// including the pass-through `[ARGS]...`.
pub fn render_usage(cmd: &clap::Command) -> String {
    let mut cmd = cmd.clone();
    if !has_positionals(&cmd) {
        cmd = with_remaining_args(cmd);
    }
    cmd.render_help().to_string()
}
