pub mod coin_trait;
pub mod ontology;
pub mod tezos;

/// Static registry entry for a coin served by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinInfo {
  pub id: u32,
  pub handle: &'static str,
  pub symbol: &'static str,
  pub name: &'static str,
  pub decimals: u32,
}

pub const ONT: CoinInfo = CoinInfo {
  id: 1024,
  handle: "ontology",
  symbol: "ONT",
  name: "Ontology",
  decimals: 0,
};

pub const XTZ: CoinInfo = CoinInfo {
  id: 1729,
  handle: "tezos",
  symbol: "XTZ",
  name: "Tezos",
  decimals: 6,
};
