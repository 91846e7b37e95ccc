use commander_core::CommandDescriptor;

pub fn command() -> CommandDescriptor {
    CommandDescriptor::new("version", "print the program version", None, |_| {
        println!("commander {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    })
}
