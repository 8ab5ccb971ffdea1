/*
[INPUT]:  API parameter definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of a limit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Bid,
    Ask,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Bid => "BID",
            OrderType::Ask => "ASK",
        }
    }
}

/// Side of a market order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketOrderType {
    Buy,
    Sell,
}

impl MarketOrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            MarketOrderType::Buy => "BUY",
            MarketOrderType::Sell => "SELL",
        }
    }
}

/// Order state filter for order listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    Pending,
    Complete,
}

impl OrderState {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::Pending => "PENDING",
            OrderState::Complete => "COMPLETE",
        }
    }
}

/// Direction of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteType {
    Buy,
    Sell,
}

impl QuoteType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteType::Buy => "BUY",
            QuoteType::Sell => "SELL",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(OrderType, MarketOrderType, OrderState, QuoteType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        assert_eq!(serde_json::to_string(&OrderType::Bid).unwrap(), "\"BID\"");
        assert_eq!(serde_json::to_string(&MarketOrderType::Sell).unwrap(), "\"SELL\"");
        assert_eq!(serde_json::to_string(&OrderState::Complete).unwrap(), "\"COMPLETE\"");
        assert_eq!(serde_json::to_string(&QuoteType::Buy).unwrap(), "\"BUY\"");

        assert_eq!(OrderType::Ask.to_string(), "ASK");
        assert_eq!(OrderState::Pending.to_string(), "PENDING");
    }

    #[test]
    fn test_deserialize_upper_case() {
        let state: OrderState = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(state, OrderState::Pending);
    }
}
