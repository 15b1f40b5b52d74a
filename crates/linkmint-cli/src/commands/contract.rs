//! Contract reads and writes through the RPC endpoint

use linkmint_sdk::abi::AbiFunction;
use linkmint_sdk::contracts::{self, Contract, ContractAddresses};
use linkmint_sdk::{Address, LinkClient, SdkError};

use super::{to_args, values_json, values_text};
use crate::{output::Output, CliError};

/// Find `name` in the catalogue.
///
/// With an explicit `contract` address every contract kind is searched at
/// that address; otherwise only the configured singletons are.
pub fn resolve(
    addresses: &ContractAddresses,
    name: &str,
    contract: Option<Address>,
) -> Result<(Address, AbiFunction), CliError> {
    let candidates: Vec<Contract> = match contract {
        Some(at) => vec![
            contracts::factory(at),
            contracts::distributor(at),
            contracts::ad_campaigns(at),
            contracts::link_token(at),
        ],
        None => {
            if contracts::link_token(Address::ZERO).function(name).is_ok() {
                return Err(CliError::InvalidInput(format!(
                    "{} is a link-token function; pass --contract <token address>",
                    name
                )));
            }
            vec![
                addresses.factory(),
                addresses.distributor(),
                addresses.ad_campaigns(),
            ]
        }
    };

    candidates
        .iter()
        .find_map(|c| c.function(name).ok().map(|f| (*c.address(), f.clone())))
        .ok_or_else(|| SdkError::UnknownFunction(name.to_string()).into())
}

fn target(
    addresses: &ContractAddresses,
    name: &str,
    contract: Option<Address>,
) -> Result<(Address, AbiFunction), CliError> {
    let (address, function) = resolve(addresses, name, contract)?;
    if address.is_zero() {
        return Err(CliError::Config(format!(
            "No contract address configured for {}",
            name
        )));
    }
    Ok((address, function))
}

/// Read-only call of a catalogue function
pub async fn call(
    client: &LinkClient,
    addresses: &ContractAddresses,
    name: &str,
    contract: Option<Address>,
    args: &[String],
    json: bool,
) -> Result<Output, CliError> {
    let (address, function) = target(addresses, name, contract)?;
    tracing::info!(%address, function = %function.signature, "calling contract");

    let values = client
        .read_contract(&address, &function, &to_args(&function.inputs, args))
        .await?;
    Ok(Output::new(json)
        .field("contract", &address.to_hex())
        .field("function", &function.signature)
        .field_value("values", values_json(&values))
        .message(&values_text(&values)))
}

/// State-changing call of a catalogue function, signed by the wallet behind the endpoint
pub async fn send(
    client: &LinkClient,
    addresses: &ContractAddresses,
    name: &str,
    from: &Address,
    contract: Option<Address>,
    args: &[String],
    json: bool,
) -> Result<Output, CliError> {
    let (address, function) = target(addresses, name, contract)?;
    tracing::info!(%address, %from, function = %function.signature, "sending transaction");

    let tx_hash = client
        .write_contract(from, &address, &function, &to_args(&function.inputs, args))
        .await?
        .to_hex();
    Ok(Output::new(json)
        .field("contract", &address.to_hex())
        .field("function", &function.signature)
        .field("tx_hash", &tx_hash)
        .message(&format!("Transaction sent: {}", tx_hash)))
}
