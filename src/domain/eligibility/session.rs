use {
    super::{Check, CheckId, Controller, Error},
    crate::{
        domain::{cue::Cue, eth},
        infra::{ledger, wallet},
    },
    futures::{
        FutureExt,
        StreamExt,
        future::BoxFuture,
        stream::FuturesUnordered,
    },
    std::sync::Arc,
    tracing::Instrument,
};

type Read = (CheckId, Result<eth::Balance, ledger::Error>);

/// Drives a [`Controller`] against a wallet provider and a ledger.
///
/// All state lives in the controller; the session performs the I/O the
/// controller asks for. Ledger reads run concurrently with wallet
/// notifications, and are only applied if they still belong to the current
/// check.
pub struct Session {
    controller: Controller,
    wallet: Option<Arc<dyn wallet::Provider>>,
    ledger: Arc<dyn ledger::Ledger>,
    subscription: Option<wallet::Subscription>,
    reads: FuturesUnordered<BoxFuture<'static, Read>>,
    /// Whether the looped [`Cue::Pending`] is playing. At most one loop runs
    /// at a time, however many checks are outstanding.
    pending_cue: bool,
}

enum Event {
    Read(Read),
    Accounts(Option<Vec<eth::Address>>),
}

impl Session {
    /// Creates a session. `wallet` is `None` when no wallet provider is
    /// available at all.
    pub fn new(
        wallet: Option<Arc<dyn wallet::Provider>>,
        ledger: Arc<dyn ledger::Ledger>,
    ) -> Self {
        Self {
            controller: Controller::default(),
            wallet,
            ledger,
            subscription: None,
            reads: FuturesUnordered::new(),
            pending_cue: false,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Whether the pending cue is currently looping.
    pub fn pending_cue(&self) -> bool {
        self.pending_cue
    }

    /// Number of ledger reads that have not returned yet, stale ones
    /// included.
    pub fn reads_in_flight(&self) -> usize {
        self.reads.len()
    }

    /// Requests account access from the wallet. Does nothing if a wallet is
    /// already connected. Failures are recorded on the controller and never
    /// retried.
    pub async fn connect(&mut self) {
        if !self.controller.wants_connection() {
            tracing::debug!("wallet already connected");
            return;
        }
        Cue::Click.play();

        let Some(wallet) = self.wallet.clone() else {
            tracing::warn!("no wallet provider available");
            self.controller.connect_failed(Error::ProviderUnavailable);
            return;
        };
        let accounts = match wallet.request_accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                tracing::warn!(?err, "wallet connection failed");
                self.controller.connect_failed(Error::ConnectionRejected);
                return;
            }
        };

        if let Some(check) = self.controller.connected(&accounts) {
            tracing::info!(address = %check.address, "wallet connected");
            self.subscription = Some(wallet.subscribe());
            self.schedule(check);
        }
    }

    /// Handles an account change notification.
    pub fn accounts_changed(&mut self, accounts: &[eth::Address]) {
        if accounts.is_empty() {
            tracing::info!("wallet disconnected");
            self.reset();
            return;
        }
        if let Some(check) = self.controller.accounts_changed(accounts) {
            tracing::info!(address = %check.address, "wallet account changed");
            self.schedule(check);
        }
    }

    /// Disconnects: forgets the account, stops listening to the wallet and
    /// abandons any outstanding reads.
    pub fn reset(&mut self) {
        self.stop_pending_cue();
        self.controller.reset();
        self.subscription = None;
        self.reads.clear();
    }

    /// Waits for and applies the next event: a completed ledger read or a
    /// wallet notification. Returns `false` when nothing more can happen.
    pub async fn next(&mut self) -> bool {
        let listening = self.subscription.is_some();
        let event = tokio::select! {
            Some(read) = self.reads.next(), if !self.reads.is_empty() => Event::Read(read),
            accounts = notification(&mut self.subscription), if listening => {
                Event::Accounts(accounts)
            }
            else => return false,
        };

        match event {
            Event::Read((id, result)) => {
                self.controller.check_completed(id, result);
                if self.controller.in_flight().is_none() {
                    self.stop_pending_cue();
                }
            }
            Event::Accounts(Some(accounts)) => self.accounts_changed(&accounts),
            Event::Accounts(None) => {
                tracing::debug!("wallet stopped sending account notifications");
                self.subscription = None;
            }
        }
        true
    }

    /// Processes events until no ledger read is outstanding.
    pub async fn settle(&mut self) {
        while !self.reads.is_empty() {
            self.next().await;
        }
    }

    fn schedule(&mut self, check: Check) {
        if !self.pending_cue {
            Cue::Pending.play();
            self.pending_cue = true;
        }
        let ledger = self.ledger.clone();
        let span = tracing::debug_span!("check", id = %check.id, address = %check.address);
        self.reads.push(
            async move { (check.id, ledger.balance_of(check.address).await) }
                .instrument(span)
                .boxed(),
        );
    }

    fn stop_pending_cue(&mut self) {
        if self.pending_cue {
            Cue::Pending.stop();
            self.pending_cue = false;
        }
    }
}

async fn notification(
    subscription: &mut Option<wallet::Subscription>,
) -> Option<Vec<eth::Address>> {
    match subscription {
        Some(subscription) => subscription.recv().await,
        None => std::future::pending().await,
    }
}
