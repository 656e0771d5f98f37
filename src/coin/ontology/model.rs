use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/**
* filename: model
* description: Ontology explorer (explorer.ont.io) response structures
**/

/// Contract receiving the network fee in ONG.
pub const GOVERNANCE_CONTRACT: &str = "AFmseVrdL9f9oyCzZefL9tG6UbviEH9ugK";

/// Native assets of the Ontology chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
  /// Ontology token, indivisible.
  Ont,
  /// Ontology Gas, 9 decimals.
  Ong,
}

impl AssetType {
  pub fn as_str(&self) -> &'static str {
    match self {
      AssetType::Ont => "ont",
      AssetType::Ong => "ong",
    }
  }
}

impl fmt::Display for AssetType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AssetType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "ont" => Ok(AssetType::Ont),
      "ong" => Ok(AssetType::Ong),
      other => Err(format!("unknown Ontology asset: {}", other)),
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct OntologyTxPage {
  #[serde(rename = "Error", default)]
  pub error: i64,
  #[serde(rename = "Result", default)]
  pub result: OntologyTxList,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OntologyTxList {
  #[serde(rename = "TxnList", default)]
  pub txn_list: Vec<OntologyTx>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OntologyTransfer {
  pub amount: String,
  pub from_address: String,
  pub to_address: String,
  /// Kept as the raw wire string; OEP-4 tokens report their own names here.
  pub asset_name: String,
}

impl OntologyTransfer {
  /// Exact match on the wire name; the explorer only ever sends lowercase.
  pub fn asset(&self) -> Option<AssetType> {
    match self.asset_name.as_str() {
      "ont" => Some(AssetType::Ont),
      "ong" => Some(AssetType::Ong),
      _ => None,
    }
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OntologyTx {
  pub txn_hash: String,
  pub confirm_flag: u64,
  #[serde(default)]
  pub txn_type: u64,
  pub txn_time: i64,
  pub height: u64,
  pub fee: String,
  #[serde(default)]
  pub block_index: u64,
  #[serde(default)]
  pub transfer_list: Vec<OntologyTransfer>,
}

/// Response of `blocklist/{n}`.
#[derive(Deserialize, Debug, Clone)]
pub struct OntologyBlockList {
  #[serde(rename = "Error")]
  pub error: i64,
  #[serde(rename = "Result", default)]
  pub result: Vec<OntologyBlock>,
}

/// Response of `block/{height}`.
#[derive(Deserialize, Debug, Clone)]
pub struct OntologyBlockResult {
  #[serde(rename = "Error")]
  pub error: i64,
  #[serde(rename = "Result", default)]
  pub result: Option<OntologyBlock>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct OntologyBlock {
  pub height: u64,
  #[serde(default)]
  pub hash: String,
  #[serde(default)]
  pub txn_list: Vec<OntologyTx>,
}
