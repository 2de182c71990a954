//! Roadmap timeline command

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use crate::client::{load_inventory, ApiClient};
use crate::output::{color_level, critical_marker, print_warning, OutputFormat};

/// Row for the phase timeline table
#[derive(Tabled)]
struct PhaseRow {
    #[tabled(rename = "")]
    critical: String,
    #[tabled(rename = "Phase")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Complexity")]
    complexity: String,
    #[tabled(rename = "Strategy")]
    strategy: String,
}

/// Show the summarized migration roadmap
pub async fn run(client: &ApiClient, file: &str, format: OutputFormat) -> Result<()> {
    let inventory = load_inventory(file)?;
    let report = client.analyze(&inventory).await?;

    let Some(roadmap) = &report.roadmap else {
        print_warning("Inventory contains no roadmap data");
        return Ok(());
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(roadmap)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if !roadmap.available {
                print_warning("Roadmap data not available");
                return Ok(());
            }

            println!("{}", "Migration Roadmap".bold());
            println!("{}", "=".repeat(50));

            if let Some(summary) = &roadmap.project_summary {
                println!(
                    "{} → {}  ({}, {:.0} person-hours)",
                    summary.start_date, summary.end_date, summary.duration, summary.total_effort
                );
                println!();
            }

            let rows: Vec<PhaseRow> = roadmap
                .phases
                .iter()
                .map(|p| PhaseRow {
                    critical: critical_marker(p.critical_path),
                    name: p.name.clone(),
                    start: p.start_date.clone(),
                    end: p.end_date.clone(),
                    duration: p.duration.clone(),
                    complexity: color_level(&p.complexity),
                    strategy: p.strategy.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\n{} critical path", "●".red());
        }
    }

    Ok(())
}
