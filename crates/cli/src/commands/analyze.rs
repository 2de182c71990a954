//! Full analysis summary command

use anyhow::Result;
use colored::Colorize;

use crate::client::{load_inventory, ApiClient};
use crate::output::{color_savings, format_currency, format_roi, OutputFormat};

/// Analyze an inventory file and print the portfolio summary
pub async fn run(
    client: &ApiClient,
    file: &str,
    currency: &str,
    format: OutputFormat,
) -> Result<()> {
    let inventory = load_inventory(file)?;
    let report = client.analyze(&inventory).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let portfolio = &report.portfolio;

            println!("{}", "Migration Analysis".bold());
            println!("{}", "=".repeat(50));
            println!("Servers analyzed:       {}", report.total_servers);
            println!(
                "Average complexity:     {:.1}%",
                report.average_complexity_score
            );
            println!();

            println!("{}", "Monthly Costs".bold());
            println!("{}", "-".repeat(50));
            println!(
                "Current (on-premises):  {}",
                format_currency(portfolio.current_costs, currency)
            );
            println!(
                "Projected (cloud):      {}",
                format_currency(portfolio.monthly_cloud_cost, currency).green()
            );

            let savings = format_currency(portfolio.monthly_savings, currency);
            println!(
                "{} {} ({:.1}%)",
                "Monthly Savings:".bold(),
                color_savings(&savings, portfolio.monthly_savings).bold(),
                portfolio.cost_reduction_percent
            );
            println!();

            println!("{}", "Migration Investment".bold());
            println!("{}", "-".repeat(50));
            println!(
                "One-time cost:          {}",
                format_currency(portfolio.total_migration_cost, currency)
            );
            println!("Break-even:             {}", format_roi(portfolio.roi_months));
            println!(
                "Annual savings:         {}",
                format_currency(portfolio.annual_savings, currency)
            );
            let three_year = format_currency(portfolio.three_year_savings, currency);
            println!(
                "3-year net savings:     {}",
                color_savings(&three_year, portfolio.three_year_savings)
            );

            if let Some(roadmap) = &report.roadmap {
                println!();
                if roadmap.available {
                    println!(
                        "Roadmap:                {} phases (see `mca roadmap`)",
                        roadmap.phases.len()
                    );
                } else {
                    println!("Roadmap:                {}", "not available".dimmed());
                }
            }

            println!();
            println!(
                "{}",
                format!(
                    "Generated {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M")
                )
                .dimmed()
            );
        }
    }

    Ok(())
}
