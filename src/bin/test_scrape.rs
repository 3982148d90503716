// src/bin/test_scrape.rs
use lottery_estimates::config::Config;
use lottery_estimates::services::scrape::{build_client, scrape_jackpot};
use log::{error, info};
use env_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let client = build_client(&config)?;

    info!("Testing jackpot scraping for {} lotteries...", config.lotteries.len());

    for lottery in &config.lotteries {
        match scrape_jackpot(&client, lottery).await {
            Ok(reading) => {
                info!("SUCCESS: {} jackpot: {}", lottery.name, reading.amount);
                println!("{:<15} {}", lottery.name, reading.amount);
            }
            Err(e) => {
                error!("ERROR: Failed to scrape {} from {}: {}", lottery.name, lottery.url, e);
                println!("{:<15} unavailable ({})", lottery.name, e);
            }
        }
    }

    Ok(())
}
