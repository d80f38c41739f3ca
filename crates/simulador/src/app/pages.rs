use clap::{Arg, ArgAction, Command};

pub fn pages_command() -> Command {
    Command::new("pages")
        .about("List the pages of the simulator in navigation order")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}
