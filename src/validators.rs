/**
* filename : validators
* description: validator lookup shared by the staking platforms
**/

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

use crate::coin::coin_trait::BlockchainClient;
use crate::coin::CoinInfo;
use crate::normalizer::types::{StakeValidatorInfo, ValidatorMap, ValidatorPage};
use crate::types::AppError;

/// Builds the address → validator table a delegation is resolved against.
#[async_trait]
pub trait ValidatorMapSource: Send + Sync {
  /// `chain_validators` is what the chain itself reports as active.
  async fn fetch_validator_map(&self, coin: CoinInfo, chain_validators: ValidatorPage) -> Result<ValidatorMap, AppError>;
}

/// Entry of `blockchains/{handle}/validators/list.json` in the assets repository.
#[derive(Deserialize, Debug, Clone)]
pub struct AssetValidator {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub website: String,
}

/// Keeps the validators that are both published in the assets repository and
/// active on chain, decorated with the published display info.
#[derive(Clone)]
pub struct AssetsValidatorService {
  client: Client,
  api_url: String,
}

impl AssetsValidatorService {
  pub fn new(api_url: String) -> Self {
    Self {
      client: Client::new(),
      api_url,
    }
  }

  pub async fn fetch_asset_validators(&self, coin: &CoinInfo) -> Result<Vec<AssetValidator>, AppError> {
    let path = format!("blockchains/{}/validators/list.json", coin.handle);
    self.get_json(&path).await
  }

  fn image_url(&self, coin: &CoinInfo, id: &str) -> String {
    format!(
      "{}/blockchains/{}/validators/assets/{}/logo.png",
      self.api_url.trim_end_matches('/'),
      coin.handle,
      id
    )
  }

  pub fn merge(&self, coin: &CoinInfo, assets: Vec<AssetValidator>, chain_validators: ValidatorPage) -> ValidatorMap {
    let published: HashMap<String, AssetValidator> = assets.into_iter().map(|v| (v.id.clone(), v)).collect();

    let mut map = ValidatorMap::new();
    for mut validator in chain_validators {
      let Some(asset) = published.get(&validator.id) else {
        continue;
      };
      validator.info = StakeValidatorInfo {
        name: asset.name.clone(),
        description: asset.description.clone(),
        image: self.image_url(coin, &asset.id),
        website: asset.website.clone(),
      };
      map.insert(validator.id.clone(), validator);
    }

    if map.is_empty() {
      warn!("[{}] No published validator is active on chain", coin.symbol);
    }
    map
  }
}

#[async_trait]
impl ValidatorMapSource for AssetsValidatorService {
  async fn fetch_validator_map(&self, coin: CoinInfo, chain_validators: ValidatorPage) -> Result<ValidatorMap, AppError> {
    let assets = self.fetch_asset_validators(&coin).await?;
    Ok(self.merge(&coin, assets, chain_validators))
  }
}

#[async_trait]
impl BlockchainClient for AssetsValidatorService {
  fn get_http_client(&self) -> &Client {
    &self.client
  }

  fn get_api_url(&self) -> &str {
    &self.api_url
  }

  fn chain_name(&self) -> &'static str {
    "ASSETS"
  }
}
