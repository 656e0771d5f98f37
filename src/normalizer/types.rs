use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Integer amount in the coin's minor unit, kept as a string.
pub type Amount = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
  Completed,
  #[serde(rename = "error")]
  Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
  Transfer,
  NativeTokenTransfer,
}

/// Plain transfer of the chain's own coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
  pub value: Amount,
  pub symbol: String,
  pub decimals: u32,
}

/// Transfer of a native token living beside the main coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeTokenTransfer {
  pub name: String,
  pub symbol: String,
  pub token_id: String,
  pub decimals: u32,
  pub value: Amount,
  pub from: String,
  pub to: String,
}

/// Chain action that moves value but is not a transfer, such as claiming rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyAction {
  pub coin: u32,
  pub title: String,
  pub key: String,
  pub token_id: String,
  pub name: String,
  pub symbol: String,
  pub decimals: u32,
  pub value: Amount,
}

pub const ANY_ACTION_CLAIM_REWARDS: &str = "Claim Rewards";
pub const KEY_STAKE_CLAIM_REWARDS: &str = "stake_claim_rewards";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TxMeta {
  AnyAction(AnyAction),
  NativeTokenTransfer(NativeTokenTransfer),
  Transfer(Transfer),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
  pub id: String,
  pub coin: u32,
  pub from: String,
  pub to: String,
  pub fee: Amount,
  pub date: i64,
  pub block: u64,
  pub status: TxStatus,
  /// `None` only on the coarse transactions listed inside a block, which
  /// are never classified.
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub tx_type: Option<TxType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<TxMeta>,
}

pub type TxPage = Vec<Tx>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
  pub number: i64,
  pub id: String,
  pub txs: Vec<Tx>,
}

// ====== Staking ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegationType {
  Delegate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StakingReward {
  pub annual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingDetails {
  pub reward: StakingReward,
  pub minimum_amount: Amount,
  pub lock_time: u64,
  #[serde(rename = "type")]
  pub delegation_type: DelegationType,
}

/// Display data published for a validator by the assets repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeValidatorInfo {
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
  pub id: String,
  pub status: bool,
  pub details: StakingDetails,
  #[serde(default)]
  pub info: StakeValidatorInfo,
}

pub type ValidatorPage = Vec<Validator>;
pub type ValidatorMap = HashMap<String, Validator>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegationStatus {
  Active,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delegation {
  pub delegator: Validator,
  pub value: Amount,
  pub status: DelegationStatus,
}

pub type DelegationsPage = Vec<Delegation>;
