/**
* filename : tezos_platform
* description: Tezos delegation and baker listing
**/

use async_trait::async_trait;
use log::{error, warn};
use std::sync::Arc;

use crate::coin::tezos::client::{TezosApi, TezosClients};
use crate::coin::{CoinInfo, XTZ};
use crate::normalizer::tezos::account_balance;
use crate::normalizer::types::{DelegationsPage, StakingDetails, ValidatorPage};
use crate::normalizer::{normalize_delegation, normalize_validator, staking_details};
use crate::platform::platform::{Platform, StakeApi};
use crate::types::AppError;
use crate::validators::{AssetsValidatorService, ValidatorMapSource};

pub struct TezosPlatform<C: TezosApi = TezosClients, V: ValidatorMapSource = AssetsValidatorService> {
  pub client: Arc<C>,
  pub validators: Arc<V>,
}

impl<C: TezosApi, V: ValidatorMapSource> TezosPlatform<C, V> {
  pub fn new(client: Arc<C>, validators: Arc<V>) -> Self {
    Self { client, validators }
  }
}

impl<C: TezosApi, V: ValidatorMapSource> Platform for TezosPlatform<C, V> {
  fn coin(&self) -> CoinInfo {
    XTZ
  }
}

#[async_trait]
impl<C: TezosApi, V: ValidatorMapSource> StakeApi for TezosPlatform<C, V> {
  async fn get_validators(&self) -> Result<ValidatorPage, AppError> {
    let validators = self.client.fetch_validators().await?;
    Ok(validators.iter().map(normalize_validator).collect())
  }

  fn get_details(&self) -> StakingDetails {
    staking_details()
  }

  async fn get_delegations(&self, address: &str) -> Result<DelegationsPage, AppError> {
    let account = self.client.fetch_account(address).await?;
    if !account.is_delegated {
      return Ok(DelegationsPage::new());
    }

    let chain_validators = self.get_validators().await?;
    let validators = self.validators.fetch_validator_map(self.coin(), chain_validators).await?;

    normalize_delegation(&account, &validators).map_err(|e| {
      error!("[TEZOS] {}", e);
      e
    })
  }

  async fn undelegated_balance(&self, address: &str) -> String {
    let balance = self.client.fetch_account(address).await
      .and_then(|account| account_balance(&account));
    balance.unwrap_or_else(|e| {
      warn!("[TEZOS] Undelegated balance for {} unavailable: {}", address, e);
      "0".to_string()
    })
  }
}
