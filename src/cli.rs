use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Network;

#[derive(Parser)]
#[command(name = "olt-explorer")]
#[command(about = "OneLedger explorer client", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file",
        default_value = "data/config.toml"
    )]
    pub config: PathBuf,
    #[command(flatten)]
    pub connection: ConnectionArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    #[arg(long, global = true, value_enum, help = "Explorer network preset")]
    pub network: Option<Network>,
    #[arg(
        short = 'u',
        long,
        global = true,
        help = "Explorer base URL. Overrides the network preset"
    )]
    pub base_url: Option<String>,
    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChainArgs {
    #[arg(long = "chain-id", help = "Only return blocks of this chain")]
    pub chain_id: Option<String>,
}

/// Settings that command line flags may override after the config file is loaded.
pub trait ApplyArgs {
    fn apply_connection(&mut self, args: &ConnectionArgs);

    fn apply_chain(&mut self, args: &ChainArgs);
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the classified transaction history of an account
    History {
        #[arg(help = "Account address (0lt...)")]
        address: String,
        #[arg(long, help = "Only transactions in this currency (OLT, ETH, BTC)")]
        currency: Option<String>,
        #[arg(short, long, help = "Page number, starting at 0")]
        page: Option<String>,
        #[arg(long, help = "Transactions per page. Defaults to the configured page size")]
        page_size: Option<String>,
        #[arg(long, help = "Read a saved explorer response instead of querying the explorer")]
        replay: Option<PathBuf>,
        #[arg(long, help = "Also print transactions that could not be classified")]
        show_rejected: bool,
    },
    /// Show account information
    Account {
        #[arg(help = "Account address (0lt...)")]
        address: String,
    },
    /// Show blocks: the latest ones, one by height, or a page before a height
    Blocks {
        #[arg(long, help = "Block height; 0 selects the most recent block")]
        height: Option<String>,
        #[arg(long, help = "List blocks below this height", conflicts_with = "height")]
        before_height: Option<String>,
        #[arg(long, help = "Maximum number of blocks to list (1-20)", conflicts_with = "height")]
        limit: Option<String>,
        #[command(flatten)]
        chain: ChainArgs,
    },
    /// Convert a decimal amount to its fixed-point representation.
    /// Amounts with a decimal point always use 18 places
    ToFixed {
        amount: String,
        #[arg(short, long, default_value_t = 18)]
        decimals: u32,
    },
    /// Convert a fixed-point amount to a decimal
    FromFixed {
        amount: String,
        #[arg(short, long, default_value_t = 18)]
        decimals: u32,
    },
    /// Decode a hex encoded domain name
    DecodeName { hex: String },
}
