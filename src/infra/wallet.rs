//! Wallet providers: whoever holds the keys and decides which accounts the
//! site may see.

use {
    crate::domain::eth,
    alloy::providers::{DynProvider, Provider as _, ProviderBuilder},
    std::time::Duration,
    tokio::{sync::mpsc, task::JoinHandle, time::MissedTickBehavior},
};

/// The capabilities the eligibility flow needs from a wallet.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Asks the wallet for account access. May be rejected.
    async fn request_accounts(&self) -> Result<Vec<eth::Address>, Error>;

    /// Starts listening for account changes. Each notification carries the
    /// full account list; an empty list means the wallet disconnected.
    fn subscribe(&self) -> Subscription;
}

/// A stream of account change notifications. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<Vec<eth::Address>>,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn new(receiver: mpsc::Receiver<Vec<eth::Address>>) -> Self {
        Self {
            receiver,
            task: None,
        }
    }

    /// A subscription that never delivers anything.
    pub fn closed() -> Self {
        let (_, receiver) = mpsc::channel(1);
        Self::new(receiver)
    }

    /// Waits for the next notification. Returns `None` once the wallet stops
    /// sending them.
    pub async fn recv(&mut self) -> Option<Vec<eth::Address>> {
        self.receiver.recv().await
    }

    /// Stops listening. Same as dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// A wallet that exposes one fixed account, e.g. an address given on the
/// command line. It never changes accounts.
#[derive(Clone, Copy, Debug)]
pub struct StaticWallet(pub eth::Address);

#[async_trait::async_trait]
impl Provider for StaticWallet {
    async fn request_accounts(&self) -> Result<Vec<eth::Address>, Error> {
        Ok(vec![self.0])
    }

    fn subscribe(&self) -> Subscription {
        Subscription::closed()
    }
}

#[derive(Clone, Debug)]
pub struct NodeConfig {
    /// JSON-RPC endpoint managing the accounts.
    pub node_url: url::Url,

    /// How often to look for account changes.
    pub poll_interval: Duration,

    /// Upper bound for a single account request.
    pub timeout: Duration,
}

/// Accounts managed by a JSON-RPC node (`eth_accounts`). Account changes are
/// detected by polling.
pub struct NodeWallet {
    provider: DynProvider,
    poll_interval: Duration,
    timeout: Duration,
}

impl NodeWallet {
    pub fn new(config: NodeConfig) -> Self {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(config.node_url)
            .erased();

        Self {
            provider,
            poll_interval: config.poll_interval,
            timeout: config.timeout,
        }
    }
}

/// https://eips.ethereum.org/EIPS/eip-1193#provider-errors
const USER_REJECTED: i64 = 4001;

async fn accounts(provider: &DynProvider, timeout: Duration) -> Result<Vec<eth::Address>, Error> {
    tokio::time::timeout(timeout, provider.get_accounts())
        .await
        .map_err(|_| Error::Timeout)?
        .map_err(|err| match err.as_error_resp() {
            Some(resp) if resp.code == USER_REJECTED => Error::Rejected(resp.message.to_string()),
            _ => Error::Transport(err),
        })
}

#[async_trait::async_trait]
impl Provider for NodeWallet {
    async fn request_accounts(&self) -> Result<Vec<eth::Address>, Error> {
        accounts(&self.provider, self.timeout).await
    }

    fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::channel(16);
        let provider = self.provider.clone();
        let (poll_interval, timeout) = (self.poll_interval, self.timeout);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(poll_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last = None;
            loop {
                interval.tick().await;
                let current = match accounts(&provider, timeout).await {
                    Ok(current) => current,
                    Err(err) => {
                        tracing::debug!(?err, "failed to poll wallet accounts");
                        continue;
                    }
                };
                if last.as_ref() == Some(&current) {
                    continue;
                }
                last = Some(current.clone());
                if sender.send(current).await.is_err() {
                    break;
                }
            }
        });

        Subscription {
            receiver,
            task: Some(task),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("wallet request timed out")]
    Timeout,
    #[error("wallet rejected the request: {0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(alloy::transports::TransportError),
}
