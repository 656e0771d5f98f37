/**
* filename : ontology_platform
* description: Ontology transactions and blocks through the explorer API
**/

use async_trait::async_trait;
use log::{debug, error, warn};
use std::sync::Arc;

use crate::coin::ontology::client::{OntologyApi, OntologyClient};
use crate::coin::ontology::model::AssetType;
use crate::coin::{CoinInfo, ONT};
use crate::normalizer::types::{Block, TxPage};
use crate::normalizer::{normalize, normalize_block};
use crate::platform::platform::{BlockApi, Platform, TokenTxApi, TxApi};
use crate::types::AppError;

pub struct OntologyPlatform<C: OntologyApi = OntologyClient> {
  pub client: Arc<C>,
}

impl<C: OntologyApi> OntologyPlatform<C> {
  pub fn new(client: Arc<C>) -> Self {
    Self { client }
  }
}

impl<C: OntologyApi> Platform for OntologyPlatform<C> {
  fn coin(&self) -> CoinInfo {
    ONT
  }
}

#[async_trait]
impl<C: OntologyApi> TxApi for OntologyPlatform<C> {
  async fn get_txs_by_address(&self, address: &str) -> Result<TxPage, AppError> {
    self.get_token_txs_by_address(address, AssetType::Ont.as_str()).await
  }
}

#[async_trait]
impl<C: OntologyApi> TokenTxApi for OntologyPlatform<C> {
  async fn get_token_txs_by_address(&self, address: &str, token: &str) -> Result<TxPage, AppError> {
    let asset: AssetType = match token.parse() {
      Ok(asset) => asset,
      Err(e) => {
        warn!("[ONTOLOGY] {} | address: {}", e, address);
        return Ok(TxPage::new());
      }
    };

    let page = self.client.fetch_txs_of_address(address, asset).await.map_err(|e| {
      error!(
        "[ONTOLOGY] Failed to get transactions for address and token | address: {} | token: {} | {}",
        address, token, e
      );
      e
    })?;

    if page.error != 0 {
      error!("[ONTOLOGY] Explorer error {} for address {} | token: {}", page.error, address, token);
      return Err(AppError::Explorer { code: page.error });
    }

    let txs: TxPage = page.result.txn_list.iter()
      .filter_map(|src| {
        let tx = normalize(src, asset);
        if tx.is_none() {
          debug!("[ONTOLOGY] Skipping tx {} for {}", src.txn_hash, asset);
        }
        tx
      })
      .collect();

    Ok(txs)
  }
}

#[async_trait]
impl<C: OntologyApi> BlockApi for OntologyPlatform<C> {
  async fn current_block_number(&self) -> Result<i64, AppError> {
    let blocks = self.client.fetch_current_block().await.map_err(|e| {
      error!("[ONTOLOGY] CurrentBlockNumber failed: {}", e);
      e
    })?;

    if blocks.error != 0 {
      return Err(AppError::Explorer { code: blocks.error });
    }

    blocks.result.first()
      .map(|block| block.height as i64)
      .ok_or_else(|| AppError::Block("explorer returned an empty block list".to_string()))
  }

  async fn get_block_by_number(&self, num: i64) -> Result<Block, AppError> {
    let height = u64::try_from(num).map_err(|_| AppError::Block(format!("invalid block number {}", num)))?;

    let response = self.client.fetch_block_by_number(height).await.map_err(|e| {
      error!("[ONTOLOGY] GetBlockByNumber {} failed: {}", num, e);
      e
    })?;

    if response.error != 0 {
      return Err(AppError::Explorer { code: response.error });
    }

    let block = response.result
      .ok_or_else(|| AppError::Block(format!("block {} missing from explorer response", num)))?;
    Ok(normalize_block(&block))
  }
}
