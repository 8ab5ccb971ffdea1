/*
[INPUT]:  Completed transport response (status + body bytes)
[OUTPUT]: Decoded JSON value or application error
[POS]:    HTTP layer - uniform response interpretation for every verb
[UPDATE]: When the API error envelope changes
*/

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::http::{BitxError, Result, TransportResponse};

/// Decode a response body and surface an embedded `error` object as a failure.
///
/// Only objects carrying a non-null `error` field fail; any other JSON value,
/// including bare scalars and arrays, is returned as is. A body that is empty
/// or not JSON (e.g. `204 No Content`) decodes to `Value::Null`.
pub fn interpret(response: &TransportResponse) -> Result<Value> {
    let json: Value = match serde_json::from_slice(&response.body) {
        Ok(json) => json,
        Err(e) => {
            debug!(
                status = response.status,
                body_len = response.body.len(),
                error = %e,
                "response body is not JSON, treating as null"
            );
            return Ok(Value::Null);
        }
    };

    if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
        let err = BitxError::api_error(error, json.get("error_code"), response.status);
        debug!(status = response.status, error = %err, "API returned an error");
        return Err(err);
    }

    Ok(json)
}

/// Convert a decoded response into a caller supplied model
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
