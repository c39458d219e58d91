//! NFT-holder eligibility: wallet connection, a single balance read against
//! the holder contract, and the verdict shown to the user.

mod controller;
mod session;

pub use self::{
    controller::{Check, CheckId, Controller},
    session::Session,
};
use crate::domain::eth;

/// Whether a wallet is connected, and with which account.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Connection {
    #[default]
    Disconnected,
    Connected(eth::Address),
}

impl Connection {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn address(&self) -> Option<eth::Address> {
        match self {
            Self::Connected(address) => Some(*address),
            Self::Disconnected => None,
        }
    }
}

/// Progress of the eligibility check for the connected account.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Eligibility {
    #[default]
    Unknown,
    Checking,
    Eligible,
    NotEligible,
    /// The ledger read failed. Displayed the same way as `NotEligible`.
    CheckFailed,
}

impl Eligibility {
    /// Maps a holder balance to a verdict: holding at least one token
    /// qualifies.
    pub fn from_balance(balance: eth::Balance) -> Self {
        if balance.is_positive() {
            Self::Eligible
        } else {
            Self::NotEligible
        }
    }
}

/// What the eligibility page shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// Disconnected, or still waiting for a result.
    Pending,
    Eligible,
    NotEligible,
}

impl Verdict {
    pub fn art(self) -> &'static str {
        match self {
            Self::Pending => "MENACE_ELIGIBILITY_1.png",
            Self::Eligible => "MENACE_ELIGIBILITY_2.png",
            Self::NotEligible => "MENACE_ELIGIBILITY_3.png",
        }
    }
}

/// User-facing failures. None of these are fatal; each one leaves the page in
/// a state from which the user can try again.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Please install MetaMask or another Web3 wallet")]
    ProviderUnavailable,
    #[error("Failed to connect wallet")]
    ConnectionRejected,
    #[error("Failed to check eligibility")]
    ReadFailed,
}
