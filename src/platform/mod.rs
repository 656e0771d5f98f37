pub mod platform;
pub mod ontology_platform;
pub mod tezos_platform;

pub use ontology_platform::OntologyPlatform;
pub use platform::{BlockApi, Platform, StakeApi, TokenTxApi, TxApi};
pub use tezos_platform::TezosPlatform;
