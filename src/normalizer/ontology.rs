use log::debug;

use super::classifier::{is_claim_reward, primary_transfer};
use super::types::{
  AnyAction, Block, NativeTokenTransfer, Transfer, Tx, TxMeta, TxStatus, TxType,
  ANY_ACTION_CLAIM_REWARDS, KEY_STAKE_CLAIM_REWARDS,
};
use super::utils::{decimal_exp, truncate_decimal};
use crate::coin::ontology::model::{AssetType, OntologyBlock, OntologyTransfer, OntologyTx};
use crate::coin::ONT;

/// ONG and network fees are denominated with 9 decimals.
pub const ONG_DECIMALS: u32 = 9;
pub const ONG_NAME: &str = "Ontology Gas";
pub const ONG_SYMBOL: &str = "ONG";

fn status_of(confirm_flag: u64) -> TxStatus {
  if confirm_flag == 1 {
    TxStatus::Completed
  } else {
    TxStatus::Failed
  }
}

/// Maps one explorer transaction to a canonical one, viewed as a movement of
/// `asset`. Returns `None` for transactions that do not fit that view; the
/// caller skips them.
pub fn normalize(src: &OntologyTx, asset: AssetType) -> Option<Tx> {
  if src.transfer_list.is_empty() {
    return None;
  }

  let fee = match decimal_exp(&src.fee, ONG_DECIMALS) {
    Ok(fee) => fee,
    Err(e) => {
      debug!("[ONTOLOGY] tx {} has an unreadable fee: {}", src.txn_hash, e);
      return None;
    }
  };

  let transfer = primary_transfer(&src.transfer_list)?;

  let (tx_type, meta) = match asset {
    AssetType::Ont => normalize_ont(transfer)?,
    AssetType::Ong => normalize_ong(transfer, is_claim_reward(&src.transfer_list))?,
  };

  Some(Tx {
    id: src.txn_hash.clone(),
    coin: ONT.id,
    from: transfer.from_address.clone(),
    to: transfer.to_address.clone(),
    fee,
    date: src.txn_time,
    block: src.height,
    status: status_of(src.confirm_flag),
    tx_type: Some(tx_type),
    meta: Some(meta),
  })
}

fn normalize_ont(transfer: &OntologyTransfer) -> Option<(TxType, TxMeta)> {
  let value = truncate_decimal(&transfer.amount).ok()?;
  let meta = TxMeta::Transfer(Transfer {
    value,
    symbol: ONT.symbol.to_string(),
    decimals: ONT.decimals,
  });
  Some((TxType::Transfer, meta))
}

fn normalize_ong(transfer: &OntologyTransfer, claim_reward: bool) -> Option<(TxType, TxMeta)> {
  let value = decimal_exp(&transfer.amount, ONG_DECIMALS).ok()?;

  let meta = if claim_reward {
    TxMeta::AnyAction(AnyAction {
      coin: ONT.id,
      title: ANY_ACTION_CLAIM_REWARDS.to_string(),
      key: KEY_STAKE_CLAIM_REWARDS.to_string(),
      token_id: AssetType::Ong.to_string(),
      name: ONG_NAME.to_string(),
      symbol: ONG_SYMBOL.to_string(),
      decimals: ONG_DECIMALS,
      value,
    })
  } else {
    TxMeta::NativeTokenTransfer(NativeTokenTransfer {
      name: ONG_NAME.to_string(),
      symbol: ONG_SYMBOL.to_string(),
      token_id: AssetType::Ong.to_string(),
      decimals: ONG_DECIMALS,
      value,
      from: transfer.from_address.clone(),
      to: transfer.to_address.clone(),
    })
  };
  Some((TxType::NativeTokenTransfer, meta))
}

/// Block listing with coarse transactions: no transfer classification, no
/// amounts, no fee.
pub fn normalize_block(src: &OntologyBlock) -> Block {
  let txs = src.txn_list.iter().map(|txn| Tx {
    id: txn.txn_hash.clone(),
    coin: ONT.id,
    from: String::new(),
    to: String::new(),
    fee: String::new(),
    date: txn.txn_time,
    block: txn.height,
    status: status_of(txn.confirm_flag),
    tx_type: None,
    meta: None,
  }).collect();

  Block {
    number: src.height as i64,
    id: src.hash.clone(),
    txs,
  }
}
