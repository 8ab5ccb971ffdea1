/*
[INPUT]:  Currency pair (e.g., "XBTZAR")
[OUTPUT]: Market data (ticker, order book, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bitx_client::BitxClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Example: Query market data
///
/// Market data endpoints accept any credentials; empty ones are fine.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = BitxClient::new("", "")?;
    let pair = std::env::args().nth(1).unwrap_or_else(|| "XBTZAR".to_string());

    match client.get_ticker(&pair).await {
        Ok(ticker) => info!(%pair, %ticker, "ticker"),
        Err(e) => error!(%pair, error = %e, "ticker request failed"),
    }

    match client.get_orderbook(&pair).await {
        Ok(book) => {
            let bids = book["bids"].as_array().map_or(0, Vec::len);
            let asks = book["asks"].as_array().map_or(0, Vec::len);
            info!(%pair, bids, asks, "order book");
        }
        Err(e) => error!(%pair, error = %e, "order book request failed"),
    }

    match client.get_trades(&pair).await {
        Ok(trades) => info!(%pair, %trades, "recent trades"),
        Err(e) => error!(%pair, error = %e, "trades request failed"),
    }

    Ok(())
}
