//! LinkClient - contract reads and writes over a transport

use linkmint_primitives::{hex_util, Address, H256};
use serde_json::Value;

use crate::abi::{decode_output_hex, encode_call_hex, AbiArg, AbiFunction, AbiValue};
use crate::transport::{deserialize_response, MockTransport, Transport};
use crate::types::{CallRequest, Session, LATEST};
use crate::SdkError;

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Client for the wallet/node RPC endpoint
pub struct LinkClient {
    transport: Box<dyn Transport>,
}

impl LinkClient {
    /// Create a client with HTTP transport
    #[cfg(feature = "http")]
    pub fn connect(url: &str) -> Self {
        Self::with_transport(HttpTransport::new(url))
    }

    /// Create a client with mock transport (for testing)
    pub fn new_mock() -> Self {
        Self::with_transport(MockTransport::new())
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, SdkError> {
        let value = self.transport.request_json(method, params).await?;
        deserialize_response(value)
    }

    // ==================== Chain / Accounts ====================

    /// Get the chain ID
    pub async fn chain_id(&self) -> Result<u64, SdkError> {
        let result: String = self.request("eth_chainId", vec![]).await?;
        parse_hex_u64(&result)
    }

    /// Accounts already exposed by the wallet; any failure reads as none
    pub async fn accounts(&self) -> Vec<Address> {
        match self.request::<Vec<Address>>("eth_accounts", vec![]).await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::debug!(error = %e, "eth_accounts failed");
                Vec::new()
            }
        }
    }

    /// Ask the wallet to expose accounts
    pub async fn request_accounts(&self) -> Result<Vec<Address>, SdkError> {
        self.request("eth_requestAccounts", vec![]).await
    }

    /// Current account and chain, tolerating an unreachable chain ID
    pub async fn session(&self) -> Session {
        let account = self.accounts().await.first().copied();
        let chain_id = self.chain_id().await.ok();
        Session { account, chain_id }
    }

    /// Request accounts and report the selected one with its chain
    pub async fn connect_wallet(&self) -> Result<Session, SdkError> {
        let account = self.request_accounts().await?.first().copied();
        let chain_id = match account {
            Some(_) => Some(self.chain_id().await?),
            None => None,
        };
        Ok(Session { account, chain_id })
    }

    // ==================== Contract calls ====================

    /// Read-only call: encode, `eth_call` at latest, decode
    pub async fn read_contract(
        &self,
        to: &Address,
        function: &AbiFunction,
        args: &[AbiArg],
    ) -> Result<Vec<AbiValue>, SdkError> {
        let request = CallRequest {
            from: None,
            to: *to,
            data: encode_call_hex(function, args)?,
        };
        tracing::debug!(to = %to, function = %function.name, "eth_call");

        let result: String = self
            .request(
                "eth_call",
                vec![serde_json::to_value(&request)?, Value::String(LATEST.to_string())],
            )
            .await?;
        Ok(decode_output_hex(function, &result)?)
    }

    /// State-changing call through the wallet; returns the transaction hash
    pub async fn write_contract(
        &self,
        from: &Address,
        to: &Address,
        function: &AbiFunction,
        args: &[AbiArg],
    ) -> Result<H256, SdkError> {
        let request = CallRequest {
            from: Some(*from),
            to: *to,
            data: encode_call_hex(function, args)?,
        };
        tracing::debug!(from = %from, to = %to, function = %function.name, "eth_sendTransaction");

        let result: String = self
            .request("eth_sendTransaction", vec![serde_json::to_value(&request)?])
            .await?;
        H256::from_hex(&result).map_err(|e| SdkError::InvalidHex(e.to_string()))
    }
}

fn parse_hex_u64(s: &str) -> Result<u64, SdkError> {
    u64::from_str_radix(hex_util::strip_prefix(s), 16).map_err(|e| SdkError::InvalidHex(e.to_string()))
}
