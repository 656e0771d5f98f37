/**
* filename : platform
* description: surfaces a chain adapter exposes to the aggregation layer
**/

use async_trait::async_trait;

use crate::coin::CoinInfo;
use crate::normalizer::types::{Block, DelegationsPage, StakingDetails, TxPage, ValidatorPage};
use crate::types::AppError;

pub trait Platform: Send + Sync {
  fn coin(&self) -> CoinInfo;
}

#[async_trait]
pub trait TxApi: Platform {
  async fn get_txs_by_address(&self, address: &str) -> Result<TxPage, AppError>;
}

#[async_trait]
pub trait TokenTxApi: Platform {
  async fn get_token_txs_by_address(&self, address: &str, token: &str) -> Result<TxPage, AppError>;
}

#[async_trait]
pub trait BlockApi: Platform {
  async fn current_block_number(&self) -> Result<i64, AppError>;
  async fn get_block_by_number(&self, num: i64) -> Result<Block, AppError>;
}

#[async_trait]
pub trait StakeApi: Platform {
  async fn get_validators(&self) -> Result<ValidatorPage, AppError>;
  fn get_details(&self) -> StakingDetails;
  async fn get_delegations(&self, address: &str) -> Result<DelegationsPage, AppError>;
  /// Spendable balance in minor units; `"0"` when the account cannot be fetched.
  async fn undelegated_balance(&self, address: &str) -> String;
}
