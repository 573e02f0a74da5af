use alloy::primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The relay method accepting beta bundles.
pub const METHOD: &str = "mev_sendBetaBundle";

/// JSON-RPC 2.0 envelope for a beta bundle submission.
///
/// The shape is fixed: `params` always holds exactly one parameter object,
/// and `id` is always 1 (the client sends one request per submission).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRequest {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: Cow<'static, str>,
    /// Always [`METHOD`].
    pub method: Cow<'static, str>,
    /// The single parameter object.
    pub params: [BundleParams; 1],
    /// Request id.
    pub id: u64,
}

impl BundleRequest {
    /// Envelope a parameter object.
    pub const fn new(params: BundleParams) -> Self {
        Self { jsonrpc: Cow::Borrowed("2.0"), method: Cow::Borrowed(METHOD), params: [params], id: 1 }
    }
}

/// Parameters of a beta bundle submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleParams {
    /// Hex-encoded signed transactions.
    pub txs: Vec<Bytes>,
    /// The slot the bundle bids for, as a decimal string.
    pub slot: String,
}

impl BundleParams {
    /// Parameters for `slot` carrying `txs`.
    pub fn new(slot: U256, txs: Vec<Bytes>) -> Self {
        Self { txs, slot: slot.to_string() }
    }
}

/// JSON-RPC 2.0 response envelope from the relay.
///
/// A well-formed success carries `result`; a rejection carries `error`. A
/// body with neither is a failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleResponse {
    /// The bundle identifier, when the relay accepted the bundle.
    #[serde(default)]
    pub result: Option<String>,
    /// The JSON-RPC error object, when the relay rejected it.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_matches_the_relay_wire_shape() {
        let request = BundleRequest::new(BundleParams::new(
            U256::from(11_291_965u64),
            vec![Bytes::from_static(&[0x02, 0xf8, 0x72])],
        ));
        let expected = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "mev_sendBetaBundle",
            "params": [{
                "txs": ["0x02f872"],
                "slot": "11291965"
            }],
            "id": 1
        });
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn slot_serializes_as_decimal_string() {
        let params = BundleParams::new(U256::MAX, vec![]);
        assert_eq!(
            params.slot,
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn response_with_result_deserializes() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":"0xabc123"}"#;
        let response: BundleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.result.as_deref(), Some("0xabc123"));
        assert!(response.error.is_none());
    }

    #[test]
    fn response_with_error_deserializes() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"slot closed"}}"#;
        let response: BundleResponse = serde_json::from_str(body).unwrap();
        assert!(response.result.is_none());
        assert_eq!(
            response.error,
            Some(RpcErrorObject { code: -32000, message: "slot closed".to_string() })
        );
    }

    #[test]
    fn empty_body_deserializes_to_neither() {
        let response: BundleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }
}
