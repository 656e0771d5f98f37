/**
* filename : coin_trait
* description: shared GET + JSON decode for explorer clients
**/

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::types::AppError;

#[async_trait]
pub trait BlockchainClient: Clone + Send + Sync {
  fn get_http_client(&self) -> &Client;
  fn get_api_url(&self) -> &str;
  fn chain_name(&self) -> &'static str;

  /// GETs `{api_url}/{path}` and decodes the body, logging it raw at debug.
  async fn get_json<T>(&self, path: &str) -> Result<T, AppError>
  where
    T: DeserializeOwned + Send,
  {
    let url = format!("{}/{}", self.get_api_url().trim_end_matches('/'), path);

    let response = self.get_http_client()
      .get(&url)
      .send()
      .await?
      .error_for_status()?;

    let response_text = response.text().await?;
    log::debug!("[{}] Raw API response: {}", self.chain_name(), response_text);

    let decoded: T = serde_json::from_str(&response_text)?;
    Ok(decoded)
  }
}
