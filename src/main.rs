use chrono::Local;
use env_logger::{Env, Target};
use log::info;

use lottery_estimates::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stdout alongside the progress lines
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();
    info!("Logger initialized. Starting the lottery estimates run...");

    let config = Config::default();
    let today = Local::now().date_naive();

    println!("Fetching current jackpots...\n");
    let path = lottery_estimates::run(&config, today).await?;

    println!("\nLottery jackpot estimates saved to {}", path.display());
    Ok(())
}
