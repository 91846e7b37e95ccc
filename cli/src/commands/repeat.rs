use clap::{value_parser, Arg};
use commander_core::{CommandDescriptor, Invocation};

pub fn command() -> CommandDescriptor {
    let options = clap::Command::new("repeat")
        .about("Print a line of text several times")
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_parser(value_parser!(u32))
                .default_value("1")
                .help("Number of repetitions"),
        );

    CommandDescriptor::new("repeat", "print text several times", Some(options), handle)
}

fn handle(inv: Invocation) -> anyhow::Result<()> {
    for line in lines(&inv)? {
        println!("{line}");
    }
    Ok(())
}

fn lines(inv: &Invocation) -> anyhow::Result<Vec<String>> {
    if inv.args().is_empty() {
        anyhow::bail!("repeat: missing text");
    }
    let count = inv.get_one::<u32>("count").copied().unwrap_or(1);
    let text = inv.args().join(" ");
    Ok(std::iter::repeat(text).take(count as usize).collect())
}
