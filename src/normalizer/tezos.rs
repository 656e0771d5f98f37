use super::types::{
  Delegation, DelegationStatus, DelegationType, DelegationsPage, StakeValidatorInfo, StakingDetails,
  StakingReward, Validator, ValidatorMap,
};
use super::utils::remove_decimals;
use crate::coin::tezos::model::{TezosAccount, TezosValidator};
use crate::coin::XTZ;
use crate::types::AppError;

/// Estimated yearly reward in percent. Bakers pay delegators out of band, so
/// there is no way to derive a real rate from chain data.
pub const ANNUAL_REWARD: f64 = 6.09;

pub fn staking_details() -> StakingDetails {
  StakingDetails {
    reward: StakingReward { annual: ANNUAL_REWARD },
    minimum_amount: "0".to_string(),
    lock_time: 0,
    delegation_type: DelegationType::Delegate,
  }
}

pub fn normalize_validator(v: &TezosValidator) -> Validator {
  Validator {
    id: v.address.clone(),
    status: true,
    details: staking_details(),
    info: StakeValidatorInfo::default(),
  }
}

/// Balance in mutez, as an integer string.
pub fn account_balance(account: &TezosAccount) -> Result<String, AppError> {
  remove_decimals(account.balance, XTZ.decimals)
}

pub fn normalize_delegation(account: &TezosAccount, validators: &ValidatorMap) -> Result<DelegationsPage, AppError> {
  if !account.is_delegated {
    return Ok(DelegationsPage::new());
  }

  let validator = validators.get(&account.delegate).ok_or_else(|| AppError::ValidatorNotFound {
    address: account.address.clone(),
    delegate: account.delegate.clone(),
    balance: account.balance,
  })?;

  Ok(vec![Delegation {
    delegator: validator.clone(),
    value: account_balance(account)?,
    status: DelegationStatus::Active,
  }])
}
