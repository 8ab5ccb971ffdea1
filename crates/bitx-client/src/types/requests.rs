/*
[INPUT]:  Call-site arguments for multi-field endpoints
[OUTPUT]: Ordered request parameters for the HTTP layer
[POS]:    Data layer - endpoint parameter records
[UPDATE]: When endpoint parameter contracts change
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{MarketOrderType, OrderType, QuoteType};
use crate::http::Params;

/// Limit order: POST /postorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostOrderRequest {
    pub pair: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl PostOrderRequest {
    pub fn new(
        pair: impl Into<String>,
        order_type: OrderType,
        volume: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            pair: pair.into(),
            order_type,
            volume,
            price,
        }
    }
}

impl From<&PostOrderRequest> for Params {
    fn from(req: &PostOrderRequest) -> Self {
        Params::new()
            .with("pair", &req.pair)
            .with("type", req.order_type)
            .with("volume", req.volume)
            .with("price", req.price)
    }
}

/// Market order: POST /marketorder
///
/// The API expects `counter_volume` for buys and `base_volume` for sells; the
/// unused one may be left as `None` and is sent empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderRequest {
    pub pair: String,
    #[serde(rename = "type")]
    pub order_type: MarketOrderType,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default)]
    pub counter_volume: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default)]
    pub base_volume: Option<Decimal>,
}

impl MarketOrderRequest {
    /// Spend `counter_volume` of the counter currency
    pub fn buy(pair: impl Into<String>, counter_volume: Decimal) -> Self {
        Self {
            pair: pair.into(),
            order_type: MarketOrderType::Buy,
            counter_volume: Some(counter_volume),
            base_volume: None,
        }
    }

    /// Sell `base_volume` of the base currency
    pub fn sell(pair: impl Into<String>, base_volume: Decimal) -> Self {
        Self {
            pair: pair.into(),
            order_type: MarketOrderType::Sell,
            counter_volume: None,
            base_volume: Some(base_volume),
        }
    }
}

impl From<&MarketOrderRequest> for Params {
    fn from(req: &MarketOrderRequest) -> Self {
        Params::new()
            .with("pair", &req.pair)
            .with("type", req.order_type)
            .with_opt("counter_volume", req.counter_volume)
            .with_opt("base_volume", req.base_volume)
    }
}

/// Send funds to an address: POST /send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SendRequest {
    pub fn new(amount: Decimal, currency: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            address: address.into(),
            description: None,
            message: None,
        }
    }

    /// Description shown in the sender's transaction list
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Message shown to the recipient
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl From<&SendRequest> for Params {
    fn from(req: &SendRequest) -> Self {
        Params::new()
            .with("amount", req.amount)
            .with("currency", &req.currency)
            .with("address", &req.address)
            .with_opt("description", req.description.as_ref())
            .with_opt("message", req.message.as_ref())
    }
}

/// Quote request: POST /quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(rename = "type")]
    pub quote_type: QuoteType,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_amount: Decimal,
    pub pair: String,
}

impl QuoteRequest {
    pub fn new(quote_type: QuoteType, base_amount: Decimal, pair: impl Into<String>) -> Self {
        Self {
            quote_type,
            base_amount,
            pair: pair.into(),
        }
    }
}

impl From<&QuoteRequest> for Params {
    fn from(req: &QuoteRequest) -> Self {
        Params::new()
            .with("type", req.quote_type)
            .with("base_amount", req.base_amount)
            .with("pair", &req.pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_post_order_params_order() {
        let req = PostOrderRequest::new("XBTZAR", OrderType::Bid, dec("0.0010"), dec("95000"));
        let params = Params::from(&req);
        assert_eq!(
            params.to_query_string(),
            "pair=XBTZAR&type=BID&volume=0.0010&price=95000"
        );
    }

    #[test]
    fn test_market_order_keeps_unused_volume_empty() {
        let params = Params::from(&MarketOrderRequest::buy("XBTZAR", dec("100")));
        assert_eq!(
            params.to_query_string(),
            "pair=XBTZAR&type=BUY&counter_volume=100&base_volume="
        );

        let params = Params::from(&MarketOrderRequest::sell("XBTZAR", dec("0.5")));
        assert_eq!(params.get("counter_volume"), Some(None));
        assert_eq!(params.get("base_volume"), Some(Some("0.5")));
    }

    #[test]
    fn test_send_params_with_optional_fields() {
        let req = SendRequest::new(dec("0.01"), "XBT", "mwd4tuGoM3Wr3jBTCNwnw3Cp5bNmXBBaMJ");
        let params = Params::from(&req);
        assert_eq!(params.get("description"), Some(None));
        assert_eq!(params.get("message"), Some(None));

        let params = Params::from(&req.with_description("rent").with_message("thanks"));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["amount", "currency", "address", "description", "message"]);
        assert_eq!(params.get("message"), Some(Some("thanks")));
    }

    #[test]
    fn test_quote_params_order() {
        let params = Params::from(&QuoteRequest::new(QuoteType::Sell, dec("0.1"), "XBTZAR"));
        assert_eq!(params.to_query_string(), "type=SELL&base_amount=0.1&pair=XBTZAR");
    }

    #[test]
    fn test_post_order_serde_uses_wire_names() {
        let req = PostOrderRequest::new("XBTZAR", OrderType::Ask, dec("1.5"), dec("100.25"));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pair": "XBTZAR", "type": "ASK", "volume": "1.5", "price": "100.25"})
        );
    }
}
