mod helpers;
mod json_types;
mod pages;
mod setup;

use clap::ArgMatches;
use tracing::error;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("setup", sub_matches)) => setup::handle_setup_command(sub_matches),
        Some(("pages", sub_matches)) => pages::handle_pages_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
