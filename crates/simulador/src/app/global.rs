use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("simulador")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate partner setups for the Simulador Societário")
        .long_about("Runs the same partner setup rules as the desktop app: every partner needs a name and a share between 1% and 100%, the shares must add up to exactly 100%, and the simulation lasts 1 to 10 years.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
