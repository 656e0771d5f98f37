// ====== Unified Error Type ======
#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("API Client error: {0}")]
  Client(String),

  #[error("Explorer error: code = {code}")]
  Explorer { code: i64 },

  #[error("Validator not found: address = {address}, delegate = {delegate}, balance = {balance}")]
  ValidatorNotFound {
    address: String,
    delegate: String,
    balance: f64,
  },

  #[error("Decimal error: {0}")]
  Decimal(String),

  #[error("Block error: {0}")]
  Block(String),

  #[error("Configuration error: {0}")]
  Config(String),
}

// ====== Error Conversions (From impls) ======

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
    AppError::Client(format!("Reqwest error: {}", err))
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
    AppError::Client(format!("JSON parse error: {}", err))
  }
}

impl From<config::ConfigError> for AppError {
  fn from(err: config::ConfigError) -> Self {
    AppError::Config(err.to_string())
  }
}
