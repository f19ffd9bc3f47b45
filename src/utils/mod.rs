pub mod base58check;
pub mod chain_normalizer;

pub use chain_normalizer::normalize_network_identifier;
