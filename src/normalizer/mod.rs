pub mod types;
pub mod utils;
pub mod classifier;
pub mod ontology;
pub mod tezos;

pub use ontology::{normalize, normalize_block};
pub use tezos::{normalize_delegation, normalize_validator, staking_details};
