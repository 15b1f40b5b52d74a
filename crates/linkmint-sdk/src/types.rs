//! RPC request and session types

use linkmint_primitives::Address;
use serde::{Deserialize, Serialize};

/// Transaction object for `eth_call` / `eth_sendTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
    /// Sender, required for `eth_sendTransaction`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Contract address
    pub to: Address,
    /// `0x`-prefixed calldata
    pub data: String,
}

/// Block tag for reads
pub const LATEST: &str = "latest";

/// Snapshot of the connected wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    /// First exposed account, if any
    pub account: Option<Address>,
    /// Chain ID, if the node answered
    pub chain_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_request_omits_missing_from() {
        let request = CallRequest {
            from: None,
            to: Address::ZERO,
            data: "0x".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("from").is_none());
        assert_eq!(json["to"], "0x0000000000000000000000000000000000000000");
    }
}
