// src/services/report.rs
use chrono::NaiveDate;
use log::{info, warn};

use crate::config::Config;
use crate::error::JackpotError;
use crate::models::{EntryKind, JackpotReading, Lottery, ReportRecord};
use crate::services::calculations;

pub const NOT_AVAILABLE: &str = "N/A";

/// Whole-dollar amount with thousands separators, e.g. `$1,234,567`.
/// Cents are truncated, not rounded.
pub fn format_currency(amount: f64) -> String {
    let whole = amount.trunc();
    let digits = format!("{:.0}", whole.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Short form of the target used in labels: `$1B`, `$500M`, otherwise the
/// full amount.
pub fn format_target(target: f64) -> String {
    const BILLION: f64 = 1_000_000_000.0;
    const MILLION: f64 = 1_000_000.0;

    if target >= BILLION && target % BILLION == 0.0 {
        format!("${}B", (target / BILLION) as u64)
    } else if target >= MILLION && target % MILLION == 0.0 {
        format!("${}M", (target / MILLION) as u64)
    } else {
        format_currency(target)
    }
}

pub fn after_tax_label(config: &Config) -> String {
    format!(
        "Cash option after taxes (est. {:.0}%)",
        config.retention() * 100.0
    )
}

pub fn draws_label(config: &Config) -> String {
    format!("Estimated Draws to {}", format_target(config.estimator.target))
}

pub fn date_label(config: &Config) -> String {
    format!("Estimated Date to {}", format_target(config.estimator.target))
}

pub fn retrieval_error_message(lottery: &Lottery) -> String {
    format!("{} jackpot could not be retrieved.", lottery.name)
}

/// The single generic row shown when a lottery has no reading.
pub fn error_record(lottery: &Lottery) -> ReportRecord {
    let mut record = ReportRecord::new(lottery.name.clone());
    record.push("Error", retrieval_error_message(lottery), EntryKind::Error);
    record
}

/// Display rows for one lottery. A failed reading collapses to a single
/// generic error row; the failure detail only goes to the log.
pub fn assemble_record(
    lottery: &Lottery,
    reading: &Result<JackpotReading, JackpotError>,
    config: &Config,
    today: NaiveDate,
) -> ReportRecord {
    let amount = match reading {
        Ok(reading) => reading.amount,
        Err(e) => {
            warn!("{} section degraded to an error entry: {}", lottery.name, e);
            return error_record(lottery);
        }
    };

    let mut record = ReportRecord::new(lottery.name.clone());

    let estimate = calculations::estimate(amount, &config.estimator, today);
    let after_tax = amount * config.retention();

    record.push("Jackpot", format_currency(amount), EntryKind::Amount);
    record.push(after_tax_label(config), format_currency(after_tax), EntryKind::AfterTax);
    record.push(
        draws_label(config),
        estimate
            .estimated_draws
            .map(|d| d.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        EntryKind::Plain,
    );
    record.push(
        date_label(config),
        estimate
            .estimated_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        EntryKind::Plain,
    );

    info!(
        "{}: jackpot {}, draws {:?}, date {:?}",
        lottery.name, amount, estimate.estimated_draws, estimate.estimated_date
    );
    record
}
