//! Read-only access to the holder contract.
//!
//! The eligibility flow needs exactly one thing from the chain: how many
//! tokens of the configured ID a given account holds. That query sits behind
//! the [`Ledger`] trait so the flow can be driven against a fake in tests.

use {
    crate::domain::eth,
    alloy::providers::{DynProvider, Provider, ProviderBuilder},
    std::time::Duration,
    tracing::Instrument,
};

alloy::sol! {
    /// Subset of the ERC1155 multi-token interface.
    #[sol(rpc)]
    interface Erc1155 {
        function balanceOf(address account, uint256 id) external view returns (uint256);
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// JSON-RPC endpoint of a node for the configured chain.
    pub node_url: url::Url,

    /// The holder contract.
    pub contract: eth::ContractAddress,

    /// The token that grants eligibility.
    pub token_id: eth::TokenId,

    /// Upper bound for a single read, including transport retries.
    pub timeout: Duration,
}

/// A read-only ledger that can report holder balances.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    /// Returns the number of eligibility tokens held by `holder`.
    async fn balance_of(&self, holder: eth::Address) -> Result<eth::Balance, Error>;
}

/// Balance reads against an ERC1155 contract over JSON-RPC.
pub struct Erc1155Ledger {
    provider: DynProvider,
    contract: eth::ContractAddress,
    token_id: eth::TokenId,
    timeout: Duration,
}

impl Erc1155Ledger {
    pub fn new(config: Config) -> Self {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(config.node_url)
            .erased();

        Self {
            provider,
            contract: config.contract,
            token_id: config.token_id,
            timeout: config.timeout,
        }
    }

    /// Queries the chain the node is serving.
    pub async fn chain_id(&self) -> Result<u64, Error> {
        tokio::time::timeout(self.timeout, self.provider.get_chain_id())
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(Error::Transport)
    }
}

#[async_trait::async_trait]
impl Ledger for Erc1155Ledger {
    async fn balance_of(&self, holder: eth::Address) -> Result<eth::Balance, Error> {
        let contract = Erc1155::new(self.contract.0, self.provider.clone());
        let call = contract.balanceOf(holder, self.token_id.0);
        let balance = tokio::time::timeout(self.timeout, call.call())
            .instrument(tracing::debug_span!("balance_of", %holder))
            .await
            .map_err(|_| Error::Timeout)??;
        Ok(eth::Balance(balance))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ledger read timed out")]
    Timeout,
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
    #[error(transparent)]
    Transport(alloy::transports::TransportError),
}
