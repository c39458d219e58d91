/// A supported Ethereum Chain ID.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChainId {
    Mainnet = 1,
    Sepolia = 11155111,
    Gnosis = 100,
    Base = 8453,
    ArbitrumOne = 42161,
    Optimism = 10,
    Polygon = 137,
}

impl ChainId {
    pub fn new(value: u64) -> Result<Self, UnsupportedChain> {
        match value {
            1 => Ok(Self::Mainnet),
            11155111 => Ok(Self::Sepolia),
            100 => Ok(Self::Gnosis),
            8453 => Ok(Self::Base),
            42161 => Ok(Self::ArbitrumOne),
            10 => Ok(Self::Optimism),
            137 => Ok(Self::Polygon),
            other => Err(UnsupportedChain(other)),
        }
    }

    /// Returns the chain ID as a numeric value.
    pub fn value(self) -> u64 {
        self as u64
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported chain {0}")]
pub struct UnsupportedChain(pub u64);
