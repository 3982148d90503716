// src/services/scrape.rs
use log::{error, info, warn};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::config::Config;
use crate::error::JackpotError;
use crate::models::{JackpotReading, Lottery};

pub type Result<T> = std::result::Result<T, JackpotError>;

/// One client shared by every lottery fetch.
pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .build()
}

pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    info!("Fetching jackpot page from URL: {}", url);

    let fetch_err = |source: reqwest::Error| JackpotError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url)
        .send()
        .await
        .map_err(fetch_err)?
        .error_for_status()
        .map_err(fetch_err)?;

    response.text().await.map_err(fetch_err)
}

/// Text of the first element matching `selector`, trimmed.
pub fn extract_jackpot_text(body: &str, selector: &str, url: &str) -> Result<String> {
    let parsed = Selector::parse(selector).map_err(|e| JackpotError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })?;

    let document = Html::parse_document(body);
    document
        .select(&parsed)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| JackpotError::ElementNotFound {
            url: url.to_string(),
            selector: selector.to_string(),
        })
}

/// Converts "$1,234,567" style text into a number. Only `$` and `,` are
/// understood as formatting.
pub fn parse_jackpot_string(raw: &str) -> Result<f64> {
    info!("Raw jackpot string: {}", raw);

    let cleaned = raw.replace(['$', ','], "").trim().to_lowercase();
    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        Ok(amount) => {
            warn!("Parse error: '{}' is not a finite amount ({})", raw, amount);
            Err(JackpotError::UnparseableAmount { raw: raw.to_string() })
        }
        Err(e) => {
            warn!("Parse error for '{}': {}", raw, e);
            Err(JackpotError::UnparseableAmount { raw: raw.to_string() })
        }
    }
}

async fn read_amount(client: &Client, lottery: &Lottery) -> Result<f64> {
    let body = fetch_page(client, &lottery.url).await?;
    let text = extract_jackpot_text(&body, &lottery.selector, &lottery.url)?;
    parse_jackpot_string(&text)
}

/// Fetch, extract and parse the jackpot for one lottery.
pub async fn scrape_jackpot(client: &Client, lottery: &Lottery) -> Result<JackpotReading> {
    match read_amount(client, lottery).await {
        Ok(amount) => {
            info!("Found {} jackpot: {}", lottery.name, amount);
            Ok(JackpotReading {
                lottery_id: lottery.id.clone(),
                amount,
            })
        }
        Err(e) => {
            error!("Scrape error for {}: {}", lottery.name, e);
            Err(e)
        }
    }
}
