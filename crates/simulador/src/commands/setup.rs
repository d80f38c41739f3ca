use clap::ArgMatches;
use tracing::{error, info};

use simulador_core::{
    Command, PartnerDefault, SetupError, SetupForm, Shell, SimulationConfig, Store,
    ValidationErrors,
};

use super::helpers::{load_config_with_warning, years_label};
use super::json_types::RejectedSetup;
use crate::color;
use crate::table::TableFormatter;

pub(crate) fn handle_setup_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let partners: Vec<PartnerDefault> = matches
        .get_many::<PartnerDefault>("partner")
        .ok_or("At least one --partner is required")?
        .cloned()
        .collect();

    let config = load_config_with_warning();
    let years = matches
        .get_one::<u32>("years")
        .copied()
        .unwrap_or_else(|| config.setup.default_years());

    info!(
        event = "cli.setup_started",
        partners = partners.len(),
        years = years,
        json_output = json_output
    );

    let form = SetupForm::with_rows(&config.setup, partners, years);
    let simulation = match form.submit() {
        Ok(simulation) => simulation,
        Err(SetupError::Invalid(errors)) => {
            report_rejected(form.total(), &errors, json_output)?;
            info!(event = "cli.setup_rejected", total = form.total());
            return Err(SetupError::Invalid(errors).into());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.setup_failed", error = %e);
            return Err(e.into());
        }
    };

    let mut shell = Shell::new();
    if let Err(e) = shell.dispatch(Command::CompleteSetup {
        config: simulation.clone(),
    }) {
        eprintln!("❌ {}", e);
        error!(event = "cli.setup_dispatch_failed", error = %e);
        return Err(e.into());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&simulation)?);
    } else {
        print_configuration(&simulation, shell.current_page().label());
    }

    info!(
        event = "cli.setup_completed",
        partners = simulation.partners.len(),
        years = simulation.simulation_years,
        next_page = %shell.current_page()
    );
    Ok(())
}

fn report_rejected(
    total: u32,
    errors: &ValidationErrors,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&RejectedSetup::new(total, errors))?
        );
        return Ok(());
    }

    eprintln!("❌ Configuração inválida (total: {}%)", total);
    for (field, message) in errors.messages() {
        eprintln!("   {}: {}", field, message);
    }
    Ok(())
}

fn partner_rows(simulation: &SimulationConfig) -> Vec<Vec<String>> {
    simulation
        .partners
        .iter()
        .map(|p| vec![p.id.clone(), p.name.clone(), format!("{}%", p.percentage)])
        .collect()
}

fn print_configuration(simulation: &SimulationConfig, next_page: &str) {
    let rows = partner_rows(simulation);
    let total = simulation.total_percentage();

    println!("{}", color::leaf("✅ Configuração válida"));
    println!();
    let table = TableFormatter::new(&["ID", "Nome", "Participação"], &rows);
    table.print_table(&rows);
    println!();
    println!(
        "Total de Participação: {}",
        color::total(&format!("{}%", total), total)
    );
    println!(
        "Período de Simulação: {}",
        years_label(simulation.simulation_years)
    );
    println!("{}", color::muted(&format!("Próxima página: {}", next_page)));
}
