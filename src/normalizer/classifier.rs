//! Reads intent out of the shape of an Ontology transfer list. The explorer
//! tags every transaction with the same type, so a reward claim is only
//! recognisable as a payout followed by a fee payment to governance.

use crate::coin::ontology::model::{AssetType, OntologyTransfer, GOVERNANCE_CONTRACT};

/// ONG sent to the governance contract.
pub fn is_fee_transfer(transfer: &OntologyTransfer) -> bool {
  transfer.asset() == Some(AssetType::Ong) && transfer.to_address == GOVERNANCE_CONTRACT
}

pub fn has_fee_transfer(transfers: &[OntologyTransfer]) -> bool {
  transfers.iter().any(is_fee_transfer)
}

/// Earliest transfer that is not a fee payment.
pub fn primary_transfer(transfers: &[OntologyTransfer]) -> Option<&OntologyTransfer> {
  transfers.iter().find(|tf| !is_fee_transfer(tf))
}

/// A reward claim carries at least two transfers, the first two in ONG, and a
/// fee payment somewhere in the list.
///
/// Only indices 0 and 1 are checked for ONG while the fee lookup scans the
/// whole list. A list like `[ong, ong, ont]` with the fee third still counts.
pub fn is_claim_reward(transfers: &[OntologyTransfer]) -> bool {
  let [first, second, ..] = transfers else {
    return false;
  };
  if first.asset() != Some(AssetType::Ong) || second.asset() != Some(AssetType::Ong) {
    return false;
  }
  has_fee_transfer(transfers)
}
