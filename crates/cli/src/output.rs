//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
#[allow(dead_code)]
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format currency
pub fn format_currency(amount: f64, currency: &str) -> String {
    match currency {
        "USD" => format!("${:.2}", amount),
        "EUR" => format!("€{:.2}", amount),
        "GBP" => format!("£{:.2}", amount),
        "INR" => format!("₹{:.2}", amount),
        _ => format!("{:.2} {}", amount, currency),
    }
}

/// Color a complexity level by severity
pub fn color_level(level: &str) -> String {
    match level.to_lowercase().as_str() {
        "low" => level.green().to_string(),
        "medium" => level.yellow().to_string(),
        "high" => level.red().to_string(),
        _ => level.to_string(),
    }
}

/// Color a savings amount: green when positive, red otherwise
pub fn color_savings(formatted: &str, savings: f64) -> String {
    if savings >= 0.0 {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Mark a critical-path phase
pub fn critical_marker(critical: bool) -> String {
    if critical {
        "●".red().to_string()
    } else {
        String::new()
    }
}

/// ROI months with the zero sentinel spelled out
pub fn format_roi(roi_months: u32) -> String {
    if roi_months == 0 {
        "n/a".to_string()
    } else {
        format!("{} months", roi_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_known_codes() {
        assert_eq!(format_currency(12040.0, "INR"), "₹12040.00");
        assert_eq!(format_currency(8600.5, "USD"), "$8600.50");
        assert_eq!(format_currency(100.0, "CHF"), "100.00 CHF");
    }

    #[test]
    fn test_format_roi_sentinel() {
        assert_eq!(format_roi(0), "n/a");
        assert_eq!(format_roi(18), "18 months");
    }
}
