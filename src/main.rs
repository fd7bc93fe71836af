use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use olt_explorer::amount::{from_fixed_point, to_fixed_point};
use olt_explorer::cli::{ApplyArgs, Cli, Commands};
use olt_explorer::config::{ExplorerConfig, load_configuration};
use olt_explorer::http::ExplorerHttpClient;
use olt_explorer::log::{init_logging, mask_string};
use olt_explorer::transactions::history_processor::decode_name;
use olt_explorer::transactions::ledger::{AccountHistory, AccountTxsParams, BlocksQuery, InMemoryLedger};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = load_configuration(&cli.config, cli.connection.network)?;
    config.apply_connection(&cli.connection);
    debug!(
        network:% = config.network,
        url = config.explorer_url();
        "Configuration loaded"
    );
    Ok(config)
}

fn explorer_client(config: &ExplorerConfig) -> Result<ExplorerHttpClient> {
    ExplorerHttpClient::with_timeout(config.explorer_url(), config.timeout())
        .with_context(|| format!("Could not create explorer client for {}", config.explorer_url()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::ToFixed { amount, decimals } => {
            println!("{}", to_fixed_point(amount, *decimals)?);
        },
        Commands::FromFixed { amount, decimals } => {
            println!("{}", from_fixed_point(amount, *decimals));
        },
        Commands::DecodeName { hex } => {
            println!("{}", decode_name(hex));
        },
        Commands::History {
            address,
            currency,
            page,
            page_size,
            replay,
            show_rejected,
        } => {
            let config = load_config(&cli)?;
            let params = AccountTxsParams {
                address: address.clone(),
                currency: currency.clone(),
                page: page.clone(),
                page_size: page_size.clone().or_else(|| config.page_size.map(|size| size.to_string())),
            };

            let mut history = match replay {
                Some(path) => {
                    info!(
                        address = mask_string(address).as_str(),
                        path:% = path.display();
                        "Replaying saved explorer response"
                    );
                    let json = fs::read_to_string(path)
                        .with_context(|| format!("Could not read saved response {}", path.display()))?;
                    let ledger = InMemoryLedger::from_response(address.as_str(), &json)?;
                    AccountHistory::new(ledger).query(&params).await?
                },
                None => AccountHistory::new(explorer_client(&config)?).query(&params).await?,
            };

            if !*show_rejected {
                history.rejected.clear();
            }
            print_json(&history)?;
        },
        Commands::Account { address } => {
            let config = load_config(&cli)?;
            let info = explorer_client(&config)?.query_account_info(address).await?;
            print_json(&info)?;
        },
        Commands::Blocks {
            height,
            before_height,
            limit,
            chain,
        } => {
            let mut config = load_config(&cli)?;
            config.apply_chain(chain);
            let client = explorer_client(&config)?;
            let chain_id = config.chain_id.as_deref();

            let blocks = if before_height.is_some() || limit.is_some() {
                let query = BlocksQuery::before(before_height.as_deref(), limit.as_deref(), chain_id)?;
                client.query_blocks_before_height(&query).await?
            } else {
                let query = BlocksQuery::at(height.as_deref(), chain_id)?;
                client.query_blocks(&query).await?
            };
            print_json(&blocks)?;
        },
    }

    Ok(())
}
