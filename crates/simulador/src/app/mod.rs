mod global;
mod pages;
mod setup;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(setup::setup_command())
        .subcommand(pages::pages_command())
}
