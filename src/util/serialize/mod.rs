//! `serde_with` adaptors for domain types.

mod chain_id;

pub use self::chain_id::ChainId;
