//! Catalog CLI commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// List services in a colored table, newest first.
pub async fn list_services(state: &AppState, category: Option<String>, json: bool) -> Result<()> {
    let services = state.catalog.list(category.as_deref()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    if services.is_empty() {
        println!();
        println!(
            "  {} No services found. Load demo data with: {}",
            style("i").blue().bold(),
            style("svcdir seed").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Category").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Url").fg(Color::White),
    ]);

    for service in &services {
        let desc = if service.description.len() > 50 {
            format!("{}...", &service.description[..47])
        } else {
            service.description.clone()
        };

        table.add_row(vec![
            Cell::new(service.id.to_string()).fg(Color::DarkGrey),
            Cell::new(&service.title).fg(Color::Cyan),
            Cell::new(&service.category),
            Cell::new(desc),
            Cell::new(&service.url).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}
