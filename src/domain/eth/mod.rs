mod chain;

pub use {
    self::chain::{ChainId, UnsupportedChain},
    alloy::primitives::{Address, U256},
};

/// A contract address.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ContractAddress(pub Address);

impl From<Address> for ContractAddress {
    fn from(inner: Address) -> Self {
        Self(inner)
    }
}

/// An ERC1155 token ID within a multi-token contract.
///
/// https://eips.ethereum.org/EIPS/eip-1155
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TokenId(pub U256);

/// A holder's token balance as reported by the ledger.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Balance(pub U256);

impl Balance {
    /// Returns `true` if the holder owns at least one token.
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero()
    }
}

impl From<U256> for Balance {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for Balance {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
