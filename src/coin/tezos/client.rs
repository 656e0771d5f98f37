use async_trait::async_trait;
use reqwest::Client;

use crate::coin::coin_trait::BlockchainClient;
use crate::coin::tezos::model::{TezosAccount, TezosValidator};
use crate::types::AppError;

/// Calls the Tezos staking support makes to the node and the indexer.
#[async_trait]
pub trait TezosApi: Send + Sync {
  async fn fetch_account(&self, address: &str) -> Result<TezosAccount, AppError>;
  async fn fetch_validators(&self) -> Result<Vec<TezosValidator>, AppError>;
}

/// Node RPC client.
#[derive(Clone)]
pub struct TezosClient {
  client: Client,
  api_url: String,
}

impl TezosClient {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url,
    }
  }

  pub async fn fetch_validators(&self) -> Result<Vec<TezosValidator>, AppError> {
    self.get_json("chains/main/blocks/head/votes/listings").await
  }
}

#[async_trait]
impl BlockchainClient for TezosClient {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }

  fn chain_name(&self) -> &'static str {
    "TEZOS"
  }
}

/// Indexer client serving account state.
#[derive(Clone)]
pub struct TezosStakeClient {
  client: Client,
  api_url: String,
}

impl TezosStakeClient {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url,
    }
  }

  pub async fn fetch_account(&self, address: &str) -> Result<TezosAccount, AppError> {
    let path = format!("account/{}", address);
    self.get_json(&path).await
  }
}

#[async_trait]
impl BlockchainClient for TezosStakeClient {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }

  fn chain_name(&self) -> &'static str {
    "TEZOS"
  }
}

/// Node and indexer together.
#[derive(Clone)]
pub struct TezosClients {
  pub rpc: TezosClient,
  pub stake: TezosStakeClient,
}

impl TezosClients {
  pub fn new(rpc_url: String, stake_url: String) -> Self {
    Self {
      rpc: TezosClient::new(rpc_url),
      stake: TezosStakeClient::new(stake_url),
    }
  }
}

#[async_trait]
impl TezosApi for TezosClients {
  async fn fetch_account(&self, address: &str) -> Result<TezosAccount, AppError> {
    self.stake.fetch_account(address).await
  }

  async fn fetch_validators(&self) -> Result<Vec<TezosValidator>, AppError> {
    self.rpc.fetch_validators().await
  }
}
