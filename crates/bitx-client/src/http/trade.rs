/*
[INPUT]:  Order and quote requests, order / quote identifiers
[OUTPUT]: Order listings, order confirmations and quote state
[POS]:    HTTP layer - trading and quote endpoints (basic auth)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{BitxClient, Params, Result};
use crate::types::{MarketOrderRequest, OrderState, PostOrderRequest, QuoteRequest};

impl BitxClient {
    /// List orders, optionally filtered by state and pair
    ///
    /// GET /listorders?state={state}&pair={pair}
    pub async fn get_orders(&self, state: Option<OrderState>, pair: Option<&str>) -> Result<Value> {
        let params = Params::new().with_opt("state", state).with_opt("pair", pair);
        self.get("/listorders", params).await
    }

    /// Place a limit order
    ///
    /// POST /postorder
    pub async fn create_order(&self, req: &PostOrderRequest) -> Result<Value> {
        self.post("/postorder", Params::from(req)).await
    }

    /// Place a market order
    ///
    /// POST /marketorder
    pub async fn create_market_order(&self, req: &MarketOrderRequest) -> Result<Value> {
        self.post("/marketorder", Params::from(req)).await
    }

    /// Request that an order be cancelled
    ///
    /// POST /stoporder
    pub async fn stop_order(&self, order_id: &str) -> Result<Value> {
        let params = Params::new().with("order_id", order_id);
        self.post("/stoporder", params).await
    }

    /// GET /orders/{order_id}
    pub async fn get_order(&self, order_id: &str) -> Result<Value> {
        self.get(&format!("/orders/{order_id}"), Params::new()).await
    }

    /// Create a quote, valid for a short time before it must be exercised
    ///
    /// POST /quotes
    pub async fn create_quote(&self, req: &QuoteRequest) -> Result<Value> {
        self.post("/quotes", Params::from(req)).await
    }

    /// GET /quotes/{id}
    pub async fn get_quote(&self, id: &str) -> Result<Value> {
        self.get(&format!("/quotes/{id}"), Params::new()).await
    }

    /// Accept a quote and execute the exchange
    ///
    /// PUT /quotes/{id}
    pub async fn exercise_quote(&self, id: &str) -> Result<Value> {
        self.put(&format!("/quotes/{id}"), Params::new()).await
    }

    /// Reject a quote
    ///
    /// DELETE /quotes/{id}
    pub async fn discard_quote(&self, id: &str) -> Result<Value> {
        self.delete(&format!("/quotes/{id}"), Params::new()).await
    }
}
