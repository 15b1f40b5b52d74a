//! # linkmint-sdk
//!
//! Rust SDK for the linkmint link-token contracts.
//!
//! ## Features
//!
//! - **ABI**: calldata encoding and decoding for the supported value types
//! - **Contracts**: descriptors of the factory, distributor, ad-campaign and link-token contracts
//! - **LinkClient**: contract reads and writes over an RPC transport
//! - **Link helpers**: URL canonicalization and link-id derivation
//! - **Units**: decimal token amount formatting and parsing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linkmint_sdk::{contracts, link, LinkClient, Address};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LinkClient::new_mock();
//!
//!     let factory = contracts::factory(Address::from_hex(
//!         "0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d",
//!     )?);
//!     let link = link::link_id_from_raw("https://example.com/post?utm_source=feed");
//!
//!     let token = factory
//!         .read(&client, "getLinkToken", &[link.link_id.into()])
//!         .await?;
//!     println!("{} -> {:?}", link.canonical, token);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
pub mod bytes32;
mod client;
pub mod contracts;
mod error;
pub mod link;
mod transport;
pub mod types;
pub mod units;

// Re-export main types
pub use client::LinkClient;
pub use error::SdkError;
pub use transport::{deserialize_response, MockTransport, RecordedRequest};

/// Re-export Transport trait for custom implementations
pub use transport::Transport;

#[cfg(feature = "http")]
pub use transport::HttpTransport;

// Re-export primitives for convenience
pub use linkmint_primitives::{Address, H256, U256};
