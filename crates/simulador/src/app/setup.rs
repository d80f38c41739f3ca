use clap::{Arg, ArgAction, Command};
use simulador_core::PartnerDefault;

pub fn setup_command() -> Command {
    Command::new("setup")
        .about("Validate a partner setup and print the resulting configuration")
        .arg(
            Arg::new("partner")
                .long("partner")
                .short('p')
                .help("Partner as NAME=PERCENT, repeat once per partner (e.g. --partner 'João=50')")
                .value_name("NAME=PERCENT")
                .action(ArgAction::Append)
                .required(true)
                .value_parser(parse_partner),
        )
        .arg(
            Arg::new("years")
                .long("years")
                .short('y')
                .help("Simulation length in years (1-10). Defaults to the configured value")
                .value_name("YEARS")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output in JSON format")
                .action(ArgAction::SetTrue),
        )
}

/// Parse `NAME=PERCENT`, splitting on the last `=` so names may contain one.
///
/// The name is kept as typed; an empty name is left for setup validation to
/// report alongside the other field errors.
pub fn parse_partner(value: &str) -> Result<PartnerDefault, String> {
    let (name, percentage) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PERCENT, got '{}'", value))?;

    let percentage = percentage
        .trim()
        .trim_end_matches('%')
        .parse::<u32>()
        .map_err(|_| format!("invalid percentage '{}' in '{}'", percentage, value))?;

    Ok(PartnerDefault::new(name, percentage))
}
