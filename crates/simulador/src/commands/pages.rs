use clap::ArgMatches;
use tracing::info;

use simulador_core::Page;

use super::json_types::PageEntry;
use crate::table::TableFormatter;

pub(crate) fn handle_pages_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.pages_started", json_output = json_output);

    if json_output {
        let entries: Vec<PageEntry> = Page::ALL.into_iter().map(PageEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let rows = page_rows();
        println!("Páginas do simulador:");
        let table = TableFormatter::new(&["ID", "Página", "Atalho"], &rows);
        table.print_table(&rows);
    }

    info!(event = "cli.pages_completed", count = Page::ALL.len());
    Ok(())
}

fn page_rows() -> Vec<Vec<String>> {
    Page::ALL
        .into_iter()
        .map(|page| {
            vec![
                page.id().to_string(),
                format!("{} {}", page.icon(), page.label()),
                format!("Ctrl+{}", page.index() + 1),
            ]
        })
        .collect()
}
