use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::AppError;

/// Largest exponent a `Decimal` mantissa can carry.
const MAX_EXP: u32 = 28;

fn pow10(exp: u32) -> Result<Decimal, AppError> {
  if exp > MAX_EXP {
    return Err(AppError::Decimal(format!("exponent {} out of range", exp)));
  }
  Ok(Decimal::from_i128_with_scale(10i128.pow(exp), 0))
}

/// Splits a plain non-negative decimal string into its integer and fraction
/// digits without interpreting them.
fn split_decimal(value: &str) -> Result<(&str, &str), AppError> {
  let value = value.trim();
  let (integer, fraction) = value.split_once('.').unwrap_or((value, ""));

  let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
  if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
    return Err(AppError::Decimal(format!("invalid amount {:?}", value)));
  }
  Ok((integer, fraction))
}

fn strip_leading_zeros(digits: &str) -> String {
  let trimmed = digits.trim_start_matches('0');
  if trimmed.is_empty() {
    "0".to_string()
  } else {
    trimmed.to_string()
  }
}

/// Shifts a decimal string `exp` places left and drops what remains after the
/// point: `decimal_exp("2.1455", 9) == "2145500000"`. Digits past `exp` are cut
/// from the text, never rounded.
pub fn decimal_exp(value: &str, exp: u32) -> Result<String, AppError> {
  let (integer, fraction) = split_decimal(value)?;
  let exp = exp as usize;

  let kept = &fraction[..fraction.len().min(exp)];
  let digits = format!("{}{}{}", integer, kept, "0".repeat(exp - kept.len()));
  Ok(strip_leading_zeros(&digits))
}

/// Integer part of a decimal string. Never rounds: `"2.999999999"` gives `"2"`.
pub fn truncate_decimal(value: &str) -> Result<String, AppError> {
  let (integer, _) = split_decimal(value)?;
  Ok(strip_leading_zeros(integer))
}

/// Converts a float balance in whole coins to an integer minor-unit string.
///
/// The float is read back through its shortest round-trip representation
/// before scaling, so the multiplication happens in decimal.
pub fn remove_decimals(volume: f64, decimals: u32) -> Result<String, AppError> {
  if !volume.is_finite() {
    return Err(AppError::Decimal(format!("balance {} is not finite", volume)));
  }
  let scaled = Decimal::from_str(&volume.to_string())
    .map_err(|e| AppError::Decimal(format!("balance {} out of range: {}", volume, e)))?
    .checked_mul(pow10(decimals)?)
    .ok_or_else(|| AppError::Decimal(format!("{} * 10^{} overflows", volume, decimals)))?;
  Ok(scaled.trunc().to_string())
}
