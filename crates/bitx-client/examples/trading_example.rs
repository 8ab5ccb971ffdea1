/*
[INPUT]:  BITX_API_KEY / BITX_API_SECRET environment variables
[OUTPUT]: Balances, open orders and a quote round trip
[POS]:    Examples - authenticated account and trading calls
[UPDATE]: When changing trading endpoints or order flow
*/

use std::str::FromStr;

use anyhow::Context;
use bitx_client::{BitxClient, BitxError, OrderState, QuoteRequest, QuoteType};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let key = std::env::var("BITX_API_KEY").context("BITX_API_KEY must be set")?;
    let secret = std::env::var("BITX_API_SECRET").context("BITX_API_SECRET must be set")?;
    let client = BitxClient::new(key, secret)?;

    let balance = client.get_balance().await.context("get balance")?;
    info!(%balance, "balances");

    let orders = client
        .get_orders(Some(OrderState::Pending), Some("XBTZAR"))
        .await
        .context("list pending orders")?;
    info!(%orders, "pending orders");

    // Quotes are discarded straight away so the example never trades.
    let req = QuoteRequest::new(QuoteType::Buy, Decimal::from_str("0.001")?, "XBTZAR");
    match client.create_quote(&req).await {
        Ok(quote) => {
            info!(%quote, "quote created");
            if let Some(id) = quote["id"].as_str() {
                let discarded = client.discard_quote(id).await?;
                info!(%discarded, "quote discarded");
            }
        }
        Err(BitxError::Api { message, .. }) => warn!(%message, "quote rejected by API"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
