mod commands;

use commander_core::is_unrecognized_command;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commander_core::execute(None, commands::all()) {
        tracing::debug!(error = ?err, "command failed");
        if is_unrecognized_command(&err) {
            eprintln!("error: {err}; run `commander help` to list commands");
            std::process::exit(2);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
