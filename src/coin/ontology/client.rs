/**
* description: Ontology explorer client
**/

use async_trait::async_trait;
use reqwest::Client;

use crate::coin::coin_trait::BlockchainClient;
use crate::coin::ontology::model::{AssetType, OntologyBlockList, OntologyBlockResult, OntologyTxPage};
use crate::types::AppError;

/// Page size requested from the explorer's address history endpoint.
const TX_PAGE_SIZE: u32 = 20;

/// Calls the Ontology chain makes to its explorer.
#[async_trait]
pub trait OntologyApi: Send + Sync {
  async fn fetch_txs_of_address(&self, address: &str, asset: AssetType) -> Result<OntologyTxPage, AppError>;
  async fn fetch_current_block(&self) -> Result<OntologyBlockList, AppError>;
  async fn fetch_block_by_number(&self, block_number: u64) -> Result<OntologyBlockResult, AppError>;
}

#[derive(Clone)]
pub struct OntologyClient {
  client: Client,
  api_url: String,
}

impl OntologyClient {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url,
    }
  }
}

#[async_trait]
impl OntologyApi for OntologyClient {
  async fn fetch_txs_of_address(&self, address: &str, asset: AssetType) -> Result<OntologyTxPage, AppError> {
    let path = format!("address/{}/{}/{}/1", address, asset, TX_PAGE_SIZE);
    self.get_json(&path).await
  }

  async fn fetch_current_block(&self) -> Result<OntologyBlockList, AppError> {
    self.get_json("blocklist/1").await
  }

  async fn fetch_block_by_number(&self, block_number: u64) -> Result<OntologyBlockResult, AppError> {
    let path = format!("block/{}", block_number);
    self.get_json(&path).await
  }
}

#[async_trait]
impl BlockchainClient for OntologyClient {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }

  fn chain_name(&self) -> &'static str {
    "ONTOLOGY"
  }
}
