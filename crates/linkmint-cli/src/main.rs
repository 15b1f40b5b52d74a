//! # linkmint-cli
//!
//! Command-line interface for the linkmint contracts.
//!
//! ## Usage
//!
//! ```bash
//! # Offline helpers
//! linkmint hash "hello"
//! linkmint selector "transfer(address,uint256)"
//! linkmint encode --signature "transfer(address,uint256)" 0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d 1000
//! linkmint decode --outputs uint256,bool 0x...
//! linkmint link-id "https://example.com/post?utm_source=feed"
//!
//! # Contract calls through the configured endpoint
//! linkmint call tokenPrice
//! linkmint call balanceOf --contract 0x... 0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d
//! linkmint send claim --from 0x... 0x... 0x...
//! ```

use clap::{Parser, Subcommand};
use linkmint_primitives::Address;
use linkmint_sdk::LinkClient;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// linkmint CLI
#[derive(Parser, Debug)]
#[command(name = "linkmint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// RPC endpoint URL for this invocation (not saved)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Keccak-256 of text or hex bytes
    Hash {
        /// UTF-8 text to hash
        text: Option<String>,
        /// Hash these hex-encoded bytes instead
        #[arg(long)]
        hex: Option<String>,
    },
    /// 4-byte selector of a function signature
    Selector {
        /// Canonical signature, e.g. "transfer(address,uint256)"
        signature: String,
    },
    /// Encode calldata
    Encode {
        /// Canonical signature
        #[arg(long)]
        signature: Option<String>,
        /// Catalogue function name
        #[arg(long)]
        function: Option<String>,
        /// Arguments; address[] values are comma-separated
        args: Vec<String>,
    },
    /// Decode return data
    Decode {
        /// Comma-separated output types
        #[arg(long)]
        outputs: String,
        /// Hex return data
        data: String,
    },
    /// Canonical form and id of a link
    LinkId {
        /// Raw URL
        url: String,
    },
    /// Format base units as a decimal amount
    FormatUnits {
        /// Integer amount in base units
        value: String,
        /// Token decimals
        #[arg(long, default_value = "6")]
        decimals: u32,
        /// Fraction digits to keep
        #[arg(long, default_value = "4")]
        precision: usize,
    },
    /// Parse a decimal amount into base units
    ParseUnits {
        /// Decimal amount
        amount: String,
        /// Token decimals
        #[arg(long, default_value = "6")]
        decimals: u32,
    },
    /// Read-only contract call
    Call {
        /// Catalogue function name
        function: String,
        /// Contract address (required for link-token functions)
        #[arg(long)]
        contract: Option<String>,
        /// Arguments; address[] values are comma-separated
        args: Vec<String>,
    },
    /// Send a contract transaction through the endpoint's wallet
    Send {
        /// Catalogue function name
        function: String,
        /// Sender address
        #[arg(long)]
        from: String,
        /// Contract address (required for link-token functions)
        #[arg(long)]
        contract: Option<String>,
        /// Arguments; address[] values are comma-separated
        args: Vec<String>,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set RPC URL
        #[arg(long)]
        set_rpc: Option<String>,
        /// Set factory address
        #[arg(long)]
        set_factory: Option<String>,
        /// Set distributor address
        #[arg(long)]
        set_distributor: Option<String>,
        /// Set ad campaigns address
        #[arg(long)]
        set_ad_campaigns: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = Config::load();
    let rpc_url = cli.rpc_url.unwrap_or_else(|| config.rpc_url.clone());

    match run(cli.command, &config, &rpc_url, cli.json).await {
        Ok(output) => output.print(),
        Err(e) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "error": e.to_string(),
                        "success": false
                    })
                );
            } else {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}

/// Execute one command. `rpc_url` is the endpoint in effect for this run and
/// never reaches the config file.
async fn run(
    command: Commands,
    config: &Config,
    rpc_url: &str,
    json: bool,
) -> Result<Output, CliError> {
    use commands::{codec, contract};

    match command {
        Commands::Hash { text, hex } => codec::hash(text.as_deref(), hex.as_deref(), json),
        Commands::Selector { signature } => codec::selector(&signature, json),
        Commands::Encode {
            signature,
            function,
            args,
        } => codec::encode(
            signature.as_deref(),
            function.as_deref(),
            &config.addresses()?,
            &args,
            json,
        ),
        Commands::Decode { outputs, data } => codec::decode(&outputs, &data, json),
        Commands::LinkId { url } => codec::link_id(&url, json),
        Commands::FormatUnits {
            value,
            decimals,
            precision,
        } => codec::format_units(&value, decimals, precision, json),
        Commands::ParseUnits { amount, decimals } => codec::parse_units(&amount, decimals, json),
        Commands::Call {
            function,
            contract: at,
            args,
        } => {
            let client = LinkClient::connect(rpc_url);
            let at = parse_optional_address(at.as_deref())?;
            contract::call(&client, &config.addresses()?, &function, at, &args, json).await
        }
        Commands::Send {
            function,
            from,
            contract: at,
            args,
        } => {
            let client = LinkClient::connect(rpc_url);
            let from = Address::from_hex(&from)?;
            let at = parse_optional_address(at.as_deref())?;
            contract::send(&client, &config.addresses()?, &function, &from, at, &args, json).await
        }
        Commands::Config {
            show,
            set_rpc,
            set_factory,
            set_distributor,
            set_ad_campaigns,
        } => handle_config(
            config,
            Config::config_path().as_deref(),
            ConfigEdits {
                rpc_url: set_rpc,
                factory: set_factory,
                distributor: set_distributor,
                ad_campaigns: set_ad_campaigns,
            },
            show,
            json,
        ),
    }
}

fn parse_optional_address(text: Option<&str>) -> Result<Option<Address>, CliError> {
    text.map(Address::from_hex)
        .transpose()
        .map_err(CliError::from)
}

/// Requested config changes
#[derive(Debug, Default)]
struct ConfigEdits {
    rpc_url: Option<String>,
    factory: Option<String>,
    distributor: Option<String>,
    ad_campaigns: Option<String>,
}

impl ConfigEdits {
    fn is_empty(&self) -> bool {
        self.rpc_url.is_none()
            && self.factory.is_none()
            && self.distributor.is_none()
            && self.ad_campaigns.is_none()
    }

    /// Apply to `config`
    fn apply(self, config: &mut Config) -> Result<(), CliError> {
        if let Some(rpc) = self.rpc_url {
            config.rpc_url = rpc;
        }
        for (value, slot) in [
            (self.factory, &mut config.contracts.factory),
            (self.distributor, &mut config.contracts.distributor),
            (self.ad_campaigns, &mut config.contracts.ad_campaigns),
        ] {
            if let Some(value) = value {
                *slot = Address::from_hex(&value)?;
            }
        }
        Ok(())
    }
}

/// Show `config`, or apply `edits` to the file at `path`.
///
/// Edits re-read the file strictly so a malformed file is reported rather
/// than replaced with defaults.
fn handle_config(
    config: &Config,
    path: Option<&Path>,
    edits: ConfigEdits,
    show: bool,
    json: bool,
) -> Result<Output, CliError> {
    if !edits.is_empty() {
        let path =
            path.ok_or_else(|| CliError::Config("Cannot determine config path".to_string()))?;
        let mut stored = Config::load_from(path)?;
        edits.apply(&mut stored)?;
        stored.save_to(path)?;
        tracing::info!(path = %path.display(), "configuration saved");
        return Ok(Output::new(json)
            .field("status", "saved")
            .message("Configuration saved"));
    }

    if show {
        let contracts = &config.contracts;
        Ok(Output::new(json)
            .field("rpc_url", &config.rpc_url)
            .field("factory", &contracts.factory.to_hex())
            .field("distributor", &contracts.distributor.to_hex())
            .field("ad_campaigns", &contracts.ad_campaigns.to_hex())
            .message(&format!(
                "RPC URL: {}\nFactory: {}\nDistributor: {}\nAd campaigns: {}",
                config.rpc_url, contracts.factory, contracts.distributor, contracts.ad_campaigns
            )))
    } else {
        Ok(Output::new(json).message(
            "Use --show to display config, or --set-rpc/--set-factory/--set-distributor/--set-ad-campaigns to modify",
        ))
    }
}
