use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
  pub blockchain: BlockchainSettings,
  pub validators: ValidatorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BlockchainSettings {
  pub ontology: ChainConfig,
  pub tezos: TezosConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChainConfig {
  pub api: String,
  #[serde(default)]
  pub symbol: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TezosConfig {
  /// Node RPC, used for the validator roll listings.
  pub api: String,
  /// Indexer API serving account details.
  pub stake_api: String,
  #[serde(default)]
  pub symbol: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ValidatorSettings {
  pub assets_api: String,
}

impl Settings {
  pub fn new() -> Result<Self, config::ConfigError> {
    Self::from_path("./config.toml")
  }

  pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
    let env_prefix = "APP"; // e.g. APP_BLOCKCHAIN__ONTOLOGY__API=https://...

    let builder = config::Config::builder()
      .add_source(config::File::with_name(path).required(true))
      .add_source(config::Environment::with_prefix(env_prefix).prefix_separator("_").separator("__"));

    builder.build()?.try_deserialize()
  }
}
