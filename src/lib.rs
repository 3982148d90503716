// src/lib.rs
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use anyhow::Context;
use chrono::NaiveDate;
use log::{error, info};
use reqwest::Client;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::ReportRecord;
use crate::services::{render, report, scrape};

/// Scrapes every configured lottery concurrently and assembles one record
/// per lottery, in configuration order.
pub async fn collect_records(client: &Client, config: &Config, today: NaiveDate) -> Vec<ReportRecord> {
    let handles: Vec<_> = config
        .lotteries
        .iter()
        .cloned()
        .map(|lottery| {
            let client = client.clone();
            tokio::spawn(async move { scrape::scrape_jackpot(&client, &lottery).await })
        })
        .collect();

    let mut records = Vec::with_capacity(handles.len());
    for (lottery, handle) in config.lotteries.iter().zip(handles) {
        let record = match handle.await {
            Ok(reading) => report::assemble_record(lottery, &reading, config, today),
            Err(e) => {
                error!("Scrape task for {} did not finish: {}", lottery.name, e);
                report::error_record(lottery)
            }
        };
        records.push(record);
    }
    records
}

/// Fetches, estimates and renders; returns the HTML document.
pub async fn generate_report(client: &Client, config: &Config, today: NaiveDate) -> String {
    let records = collect_records(client, config, today).await;
    render::render_report(&records)
}

/// One full pass: scrape, render and write the page to the configured path.
pub async fn run(config: &Config, today: NaiveDate) -> anyhow::Result<PathBuf> {
    let client = scrape::build_client(config)?;
    let html = generate_report(&client, config, today).await;

    render::write_report(&config.output_path, &html)
        .await
        .with_context(|| format!("failed to write report to {}", config.output_path.display()))?;
    info!("Report written to {}", config.output_path.display());
    Ok(config.output_path.clone())
}
