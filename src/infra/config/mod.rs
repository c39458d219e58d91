mod file;

pub use self::file::load;
use crate::{
    domain::eth,
    infra::{ledger, wallet},
};

/// Everything the eligibility check needs to talk to the outside world.
#[derive(Clone, Debug)]
pub struct Config {
    /// The chain the holder contract lives on. The ledger node must serve
    /// this chain.
    pub chain_id: eth::ChainId,
    pub ledger: ledger::Config,
    /// Accounts from a JSON-RPC node, if configured.
    pub wallet: Option<wallet::NodeConfig>,
}
