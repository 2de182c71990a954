//! Per-server cost breakdown command

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use crate::client::{load_inventory, ApiClient};
use crate::output::{color_savings, format_currency, print_warning, OutputFormat};

/// Row for the per-server cost table
#[derive(Tabled)]
struct ServerCostRow {
    #[tabled(rename = "Server")]
    server: String,
    #[tabled(rename = "Cloud / Month")]
    projected: String,
    #[tabled(rename = "Current / Month")]
    current: String,
    #[tabled(rename = "Migration Cost")]
    migration: String,
    #[tabled(rename = "Savings / Month")]
    savings: String,
}

/// Show per-server cost breakdowns with portfolio totals
pub async fn run(
    client: &ApiClient,
    file: &str,
    server_filter: Option<String>,
    currency: &str,
    format: OutputFormat,
) -> Result<()> {
    let inventory = load_inventory(file)?;
    let report = client.analyze(&inventory).await?;

    let mut breakdowns: Vec<_> = report
        .portfolio
        .servers
        .iter()
        .filter(|(id, _)| {
            server_filter
                .as_ref()
                .map(|f| id.contains(f.as_str()))
                .unwrap_or(true)
        })
        .collect();
    breakdowns.sort_by(|a, b| a.0.cmp(b.0));

    match format {
        OutputFormat::Json => {
            let filtered: std::collections::HashMap<_, _> = breakdowns.into_iter().collect();
            let json = serde_json::to_string_pretty(&filtered)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if breakdowns.is_empty() {
                print_warning("No servers matched");
                return Ok(());
            }

            let rows: Vec<ServerCostRow> = breakdowns
                .iter()
                .map(|(id, b)| ServerCostRow {
                    server: id.to_string(),
                    projected: format_currency(b.projected_monthly_cost, currency),
                    current: format_currency(b.current_monthly_cost, currency),
                    migration: format_currency(b.migration_cost, currency),
                    savings: color_savings(&format_currency(b.savings, currency), b.savings),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);

            println!();
            println!(
                "{}  cloud {} | current {} | savings {}",
                "Totals:".bold(),
                format_currency(report.portfolio.monthly_cloud_cost, currency),
                format_currency(report.portfolio.current_costs, currency),
                format_currency(report.portfolio.monthly_savings, currency)
            );
        }
    }

    Ok(())
}
