// src/main.rs
/**
* description: Command line entry point querying the Ontology and Tezos adapters.
**/

use atlas_scanner::coin::ontology::client::OntologyClient;
use atlas_scanner::coin::tezos::client::TezosClients;
use atlas_scanner::config::Settings;
use atlas_scanner::platform::{BlockApi, OntologyPlatform, StakeApi, TezosPlatform, TokenTxApi, TxApi};
use atlas_scanner::types::AppError;
use atlas_scanner::validators::AssetsValidatorService;

use log::info;
use serde::Serialize;
use std::sync::Arc;

const USAGE: &str = "usage: atlas-scanner <height | block <n> | txs <address> [token] | delegations <address> | validators | details | balance <address>>";

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn arg(args: &[String], index: usize) -> Result<&str, AppError> {
  args.get(index)
    .map(String::as_str)
    .ok_or_else(|| AppError::Config(USAGE.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
  // 1. Initialize logging
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  // 2. Load configuration
  let settings = Settings::new()?;
  info!("Configuration loaded.");

  // 3. Create API clients
  let ontology = OntologyPlatform::new(Arc::new(OntologyClient::new(settings.blockchain.ontology.api.clone())));
  let tezos = TezosPlatform::new(
    Arc::new(TezosClients::new(
      settings.blockchain.tezos.api.clone(),
      settings.blockchain.tezos.stake_api.clone(),
    )),
    Arc::new(AssetsValidatorService::new(settings.validators.assets_api.clone())),
  );

  // 4. Dispatch
  let args: Vec<String> = std::env::args().skip(1).collect();
  match arg(&args, 0)? {
    "height" => print_json(&ontology.current_block_number().await?),
    "block" => {
      let num = arg(&args, 1)?
        .parse::<i64>()
        .map_err(|e| AppError::Config(format!("invalid block number: {}", e)))?;
      print_json(&ontology.get_block_by_number(num).await?)
    }
    "txs" => {
      let address = arg(&args, 1)?;
      let txs = match args.get(2) {
        Some(token) => ontology.get_token_txs_by_address(address, token).await?,
        None => ontology.get_txs_by_address(address).await?,
      };
      info!("Fetched {} transactions for {}", txs.len(), address);
      print_json(&txs)
    }
    "delegations" => print_json(&tezos.get_delegations(arg(&args, 1)?).await?),
    "validators" => print_json(&tezos.get_validators().await?),
    "details" => print_json(&tezos.get_details()),
    "balance" => print_json(&tezos.undelegated_balance(arg(&args, 1)?).await),
    _ => Err(AppError::Config(USAGE.to_string())),
  }
}
