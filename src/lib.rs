pub mod coin;
pub mod config;
pub mod normalizer;
pub mod platform;
pub mod types;
pub mod validators;
