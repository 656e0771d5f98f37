use serde::Deserialize;

/**
* filename: model
* description: Tezos account and baker structures
**/

/// Account as reported by the indexer's `account/{address}` endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TezosAccount {
  pub address: String,
  #[serde(default)]
  pub delegate: String,
  #[serde(rename = "spendable_balance")]
  pub balance: f64,
  #[serde(default)]
  pub is_delegated: bool,
}

/// Entry of the node's voting roll listings; every listed key is an active baker.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TezosValidator {
  #[serde(rename = "pkh")]
  pub address: String,
  #[serde(default)]
  pub rolls: u64,
}
