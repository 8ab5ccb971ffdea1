/*
[INPUT]:  Currency pair identifiers
[OUTPUT]: Market data (tickers, order book, recent trades)
[POS]:    HTTP layer - public market data endpoints
[UPDATE]: When adding new market data endpoints or changing parameters
*/

use serde_json::Value;

use crate::http::{BitxClient, Params, Result};

impl BitxClient {
    /// Ticker for a single currency pair
    ///
    /// GET /ticker?pair={pair}
    pub async fn get_ticker(&self, pair: &str) -> Result<Value> {
        self.get("/ticker", Params::new().with("pair", pair)).await
    }

    /// Tickers for all active pairs
    ///
    /// GET /tickers
    pub async fn get_tickers(&self) -> Result<Value> {
        self.get("/tickers", Params::new()).await
    }

    /// Top of the order book for a pair
    ///
    /// GET /orderbook?pair={pair}
    pub async fn get_orderbook(&self, pair: &str) -> Result<Value> {
        self.get("/orderbook", Params::new().with("pair", pair)).await
    }

    /// Latest trades for a pair
    ///
    /// GET /trades?pair={pair}
    pub async fn get_trades(&self, pair: &str) -> Result<Value> {
        self.get("/trades", Params::new().with("pair", pair)).await
    }
}
