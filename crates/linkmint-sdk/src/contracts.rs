//! Contract catalogue: descriptors and addresses of the deployed contracts

use linkmint_primitives::{Address, PrimitiveError, H256};
use serde::{Deserialize, Serialize};

use crate::abi::{decode_output, encode_call, AbiArg, AbiFunction, AbiType, AbiValue};
use crate::client::LinkClient;
use crate::SdkError;

use crate::abi::AbiType::{Address as AddressT, AddressArray, Bool, Bytes32, String as StringT, Uint256};

/// Environment variable overriding the factory address
pub const FACTORY_ADDRESS_ENV: &str = "LINKMINT_FACTORY_ADDRESS";
/// Environment variable overriding the distributor address
pub const DISTRIBUTOR_ADDRESS_ENV: &str = "LINKMINT_DISTRIBUTOR_ADDRESS";
/// Environment variable overriding the ad-campaigns address
pub const AD_CAMPAIGNS_ADDRESS_ENV: &str = "LINKMINT_AD_CAMPAIGNS_ADDRESS";

/// Name of the distributor's 24-hour revenue function
pub const REVENUE_24H: &str = "revenueLast24Hours";

/// Catalogue keys that differ from the on-chain function name
const ALIASES: &[(&str, &str)] = &[("revenue24h", REVENUE_24H)];

/// On-chain name for a catalogue key
fn resolve_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |&(_, target)| target)
}

/// A deployed contract and the functions callable on it
#[derive(Debug, Clone)]
pub struct Contract {
    address: Address,
    functions: Vec<AbiFunction>,
}

impl Contract {
    /// Create a contract with no functions
    pub fn new(address: Address) -> Self {
        Self {
            address,
            functions: Vec::new(),
        }
    }

    /// Add a function with builder pattern
    pub fn with_function(mut self, function: AbiFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Contract address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// All function descriptors
    pub fn functions(&self) -> &[AbiFunction] {
        &self.functions
    }

    /// Look up a function by on-chain name or catalogue key (`revenue24h`)
    pub fn function(&self, name: &str) -> Result<&AbiFunction, SdkError> {
        let target = resolve_alias(name);
        self.functions
            .iter()
            .find(|f| f.name == target)
            .ok_or_else(|| SdkError::UnknownFunction(name.to_string()))
    }

    /// Encode a call to `name`
    pub fn encode_call(&self, name: &str, args: &[AbiArg]) -> Result<Vec<u8>, SdkError> {
        Ok(encode_call(self.function(name)?, args)?)
    }

    /// Decode return data of `name`
    pub fn decode_output(&self, name: &str, data: &[u8]) -> Result<Vec<AbiValue>, SdkError> {
        Ok(decode_output(self.function(name)?, data)?)
    }

    /// Read through `client` with `eth_call`
    pub async fn read(
        &self,
        client: &LinkClient,
        name: &str,
        args: &[AbiArg],
    ) -> Result<Vec<AbiValue>, SdkError> {
        client.read_contract(&self.address, self.function(name)?, args).await
    }

    /// Write through `client` with `eth_sendTransaction`
    pub async fn write(
        &self,
        client: &LinkClient,
        from: &Address,
        name: &str,
        args: &[AbiArg],
    ) -> Result<H256, SdkError> {
        client.write_contract(from, &self.address, self.function(name)?, args).await
    }
}

fn function(name: &str, inputs: Vec<AbiType>, outputs: Vec<AbiType>) -> AbiFunction {
    let types: Vec<&str> = inputs.iter().map(AbiType::as_str).collect();
    let signature = format!("{}({})", name, types.join(","));
    AbiFunction::new(name, signature, inputs, outputs)
}

/// Link-token factory
pub fn factory(address: Address) -> Contract {
    Contract::new(address)
        .with_function(function("getLinkToken", vec![Bytes32], vec![AddressT]))
        .with_function(function(
            "getOrCreateLinkToken",
            vec![Bytes32, StringT, StringT],
            vec![AddressT],
        ))
        .with_function(function("purchase", vec![Bytes32, Uint256, AddressT], vec![]))
        .with_function(function("tokenPrice", vec![], vec![Uint256]))
        .with_function(function("getAllLinkTokens", vec![], vec![AddressArray]))
}

/// Revenue distributor
pub fn distributor(address: Address) -> Contract {
    Contract::new(address)
        .with_function(function("pendingRewards", vec![AddressT, AddressT], vec![Uint256]))
        .with_function(function("claim", vec![AddressT, AddressT], vec![Uint256]))
        .with_function(function("claimBatch", vec![AddressArray, AddressT], vec![Uint256]))
        .with_function(function(REVENUE_24H, vec![AddressT], vec![Uint256]))
}

/// Ad campaign registry
pub fn ad_campaigns(address: Address) -> Contract {
    Contract::new(address)
        .with_function(function(
            "createCampaign",
            vec![Bytes32, Bytes32, AddressT, Uint256, Uint256],
            vec![Uint256],
        ))
        .with_function(function(
            "campaigns",
            vec![Uint256],
            vec![
                AddressT, Bytes32, Bytes32, AddressT, Uint256, Uint256, Uint256, Uint256, Bool,
                Bool,
            ],
        ))
        .with_function(function("fundCampaign", vec![Uint256, Uint256], vec![]))
        .with_function(function("pauseCampaign", vec![Uint256, Bool], vec![]))
        .with_function(function("closeCampaign", vec![Uint256, AddressT], vec![]))
        .with_function(function("remainingBudget", vec![Uint256], vec![Uint256]))
}

/// Per-link token
pub fn link_token(address: Address) -> Contract {
    Contract::new(address)
        .with_function(function("totalSupply", vec![], vec![Uint256]))
        .with_function(function("balanceOf", vec![AddressT], vec![Uint256]))
}

/// Addresses of the singleton contracts; unset entries are the zero address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractAddresses {
    /// Link-token factory
    pub factory: Address,
    /// Revenue distributor
    pub distributor: Address,
    /// Ad campaign registry
    pub ad_campaigns: Address,
}

impl ContractAddresses {
    /// Defaults overridden by the `LINKMINT_*_ADDRESS` environment variables
    pub fn from_env() -> Result<Self, SdkError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Override entries from a key lookup (environment-style names)
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SdkError> {
        for (key, slot) in [
            (FACTORY_ADDRESS_ENV, &mut self.factory),
            (DISTRIBUTOR_ADDRESS_ENV, &mut self.distributor),
            (AD_CAMPAIGNS_ADDRESS_ENV, &mut self.ad_campaigns),
        ] {
            if let Some(value) = lookup(key) {
                *slot = Address::from_hex(value.trim()).map_err(PrimitiveError::from)?;
                tracing::debug!(%key, address = %slot, "contract address override");
            }
        }
        Ok(self)
    }

    /// Factory contract at the configured address
    pub fn factory(&self) -> Contract {
        factory(self.factory)
    }

    /// Distributor contract at the configured address
    pub fn distributor(&self) -> Contract {
        distributor(self.distributor)
    }

    /// Ad campaigns contract at the configured address
    pub fn ad_campaigns(&self) -> Contract {
        ad_campaigns(self.ad_campaigns)
    }

    /// Every function of the singleton contracts, with its contract address
    pub fn catalogue(&self) -> Vec<(Address, AbiFunction)> {
        [self.factory(), self.distributor(), self.ad_campaigns()]
            .into_iter()
            .flat_map(|contract| {
                let address = contract.address;
                contract.functions.into_iter().map(move |f| (address, f))
            })
            .collect()
    }
}
