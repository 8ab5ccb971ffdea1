/*
[INPUT]:  Account ids, assets, amounts and addresses
[OUTPUT]: Accounts, balances, transactions, funding addresses, withdrawals, sends
[POS]:    HTTP layer - account and funding endpoints (basic auth)
[UPDATE]: When adding new account endpoints or changing parameters
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{BitxClient, Params, Result};
use crate::types::SendRequest;

impl BitxClient {
    /// Create an additional account for a currency
    ///
    /// POST /accounts
    pub async fn create_account(&self, currency: &str, name: &str) -> Result<Value> {
        let params = Params::new().with("currency", currency).with("name", name);
        self.post("/accounts", params).await
    }

    /// Balances of all accounts
    ///
    /// GET /balance
    pub async fn get_balance(&self) -> Result<Value> {
        self.get("/balance", Params::new()).await
    }

    /// Transactions of an account between two row indexes
    ///
    /// GET /accounts/{account}/transactions?min_row={min_row}&max_row={max_row}
    pub async fn get_transactions(
        &self,
        account: &str,
        min_row: i64,
        max_row: i64,
    ) -> Result<Value> {
        let path = format!("/accounts/{account}/transactions");
        let params = Params::new().with("min_row", min_row).with("max_row", max_row);
        self.get(&path, params).await
    }

    /// Receive address for an asset; `address` selects one of several
    ///
    /// GET /funding_address?asset={asset}&address={address}
    pub async fn get_funding_address(&self, asset: &str, address: Option<&str>) -> Result<Value> {
        let params = Params::new().with("asset", asset).with_opt("address", address);
        self.get("/funding_address", params).await
    }

    /// Allocate a new receive address for an asset
    ///
    /// POST /funding_address
    pub async fn create_funding_address(&self, asset: &str) -> Result<Value> {
        let params = Params::new().with("asset", asset);
        self.post("/funding_address", params).await
    }

    /// Withdrawal requests
    ///
    /// GET /withdrawals
    pub async fn get_withdrawals(&self) -> Result<Value> {
        self.get("/withdrawals", Params::new()).await
    }

    /// Request a withdrawal, e.g. `withdrawal_type = "ZAR_EFT"`
    ///
    /// POST /withdrawals
    pub async fn create_withdrawal(&self, withdrawal_type: &str, amount: Decimal) -> Result<Value> {
        let params = Params::new()
            .with("type", withdrawal_type)
            .with("amount", amount);
        self.post("/withdrawals", params).await
    }

    /// GET /withdrawals/{id}
    pub async fn get_withdrawal(&self, id: &str) -> Result<Value> {
        self.get(&format!("/withdrawals/{id}"), Params::new()).await
    }

    /// Cancel a pending withdrawal
    ///
    /// DELETE /withdrawals/{id}
    pub async fn delete_withdrawal(&self, id: &str) -> Result<Value> {
        let path = format!("/withdrawals/{id}");
        self.delete(&path, Params::new()).await
    }

    /// Send funds to an address or email
    ///
    /// POST /send
    pub async fn create_send(&self, req: &SendRequest) -> Result<Value> {
        self.post("/send", Params::from(req)).await
    }
}
