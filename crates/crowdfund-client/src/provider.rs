/*!
# Provider Boundary

[`Provider`] is the EIP-1193 `request` interface: every read, wallet and
transaction operation the client performs goes through one JSON-RPC method
call. [`HttpProvider`] speaks JSON-RPC 2.0 over HTTP; tests substitute an
in-memory chain.
*/

use crate::errors::{ClientError, ClientResult};
use serde::Deserialize;
use serde_json::{json, Value};
use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};
use tracing::{debug, warn};
use url::Url;

pub trait Provider: Send + Sync {
    /// Issue one JSON-RPC request. A JSON `null` result is returned as `Value::Null`.
    fn request(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = ClientResult<Value>> + Send;
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcErrorObject>,
}

/// JSON-RPC 2.0 over HTTP
pub struct HttpProvider {
    http: reqwest::Client,
    url: Url,
    next_id: AtomicU64,
}

impl HttpProvider {
    pub fn new(url: &str) -> ClientResult<Self> {
        let url = Url::parse(url)
            .map_err(|e| ClientError::InvalidConfig(format!("Invalid RPC URL '{}': {}", url, e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            url,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Provider for HttpProvider {
    async fn request(&self, method: &str, params: Value) -> ClientResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(id, method, "rpc request");
        let response: RpcResponse = self
            .http
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            warn!(id, method, code = error.code, "rpc error: {}", error.message);
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        assert!(matches!(
            HttpProvider::new("not a url"),
            Err(ClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_response_null_result() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert!(response.result.is_null());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_error_object() {
        let response: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#,
        )
        .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, 4001);
        assert_eq!(error.message, "User rejected the request.");
    }
}
