// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::models::Lottery;

pub const POWERBALL_URL: &str = "https://www.lottonumbers.com/powerball";
pub const MEGA_MILLIONS_URL: &str = "https://www.lottonumbers.com/mega-millions";
pub const JACKPOT_SELECTOR: &str = "p.bigText";

pub const TAX_RATE: f64 = 0.73;
pub const HISTORICAL_AVG_DRAWS: u32 = 38;
pub const START_JACKPOT: f64 = 82_000_000.0;
pub const TARGET_JACKPOT: f64 = 1_000_000_000.0;

pub const OUTPUT_PATH: &str = "/var/www/html/lottery/index.html";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Heuristic anchors for the linear draw estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorParams {
    pub historical_avg_draws: u32,
    pub start_jackpot: f64,
    pub target: f64,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        EstimatorParams {
            historical_avg_draws: HISTORICAL_AVG_DRAWS,
            start_jackpot: START_JACKPOT,
            target: TARGET_JACKPOT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub lotteries: Vec<Lottery>,
    pub tax_rate: f64,
    pub estimator: EstimatorParams,
    pub output_path: PathBuf,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lotteries: vec![
                Lottery::new("powerball", "Powerball", POWERBALL_URL, JACKPOT_SELECTOR),
                Lottery::new("mega-millions", "Mega Millions", MEGA_MILLIONS_URL, JACKPOT_SELECTOR),
            ],
            tax_rate: TAX_RATE,
            estimator: EstimatorParams::default(),
            output_path: PathBuf::from(OUTPUT_PATH),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Fraction of the advertised jackpot kept after tax.
    pub fn retention(&self) -> f64 {
        1.0 - self.tax_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_scrapes_both_lotteries_with_the_same_selector() {
        let config = Config::default();
        let names: Vec<&str> = config.lotteries.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Powerball", "Mega Millions"]);
        assert!(config.lotteries.iter().all(|l| l.selector == "p.bigText"));
    }

    #[test]
    fn default_estimator_params_match_historical_anchors() {
        let params = EstimatorParams::default();
        assert_eq!(params.historical_avg_draws, 38);
        assert_eq!(params.start_jackpot, 82_000_000.0);
        assert_eq!(params.target, 1_000_000_000.0);
    }

    #[test]
    fn default_output_is_the_static_site_page() {
        let config = Config::default();
        assert_eq!(config.output_path, PathBuf::from("/var/www/html/lottery/index.html"));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn retention_is_complement_of_tax_rate() {
        let config = Config::default();
        assert!((config.retention() - 0.27).abs() < 1e-12);
    }
}
