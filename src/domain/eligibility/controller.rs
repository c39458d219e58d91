use {
    super::{Connection, Eligibility, Error, Verdict},
    crate::{domain::eth, infra::ledger},
    std::fmt::{self, Display, Formatter},
};

/// Identifies one eligibility check. Later checks get larger IDs.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CheckId(u64);

impl Display for CheckId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A ledger read the controller wants performed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Check {
    pub id: CheckId,
    pub address: eth::Address,
}

/// Synchronous state machine behind the eligibility page.
///
/// The controller never performs I/O. Transitions that require a ledger read
/// return a [`Check`]; its outcome is fed back through
/// [`Controller::check_completed`]. Only the most recently issued check is
/// accepted, so a slow read for a previous account can never overwrite the
/// verdict for the current one.
#[derive(Debug, Default)]
pub struct Controller {
    connection: Connection,
    eligibility: Eligibility,
    error: Option<Error>,
    in_flight: Option<Check>,
    last_check: u64,
}

impl Controller {
    pub fn connection(&self) -> Connection {
        self.connection
    }

    pub fn eligibility(&self) -> Eligibility {
        self.eligibility
    }

    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// The check whose result is still awaited, if any.
    pub fn in_flight(&self) -> Option<Check> {
        self.in_flight
    }

    pub fn verdict(&self) -> Verdict {
        match (self.connection, self.eligibility) {
            (Connection::Disconnected, _) => Verdict::Pending,
            (_, Eligibility::Unknown | Eligibility::Checking) => Verdict::Pending,
            (_, Eligibility::Eligible) => Verdict::Eligible,
            (_, Eligibility::NotEligible | Eligibility::CheckFailed) => Verdict::NotEligible,
        }
    }

    /// A connection attempt only makes sense while disconnected.
    pub fn wants_connection(&self) -> bool {
        !self.connection.is_connected()
    }

    /// Records a failed connection attempt. The connection state is left as
    /// it was.
    pub fn connect_failed(&mut self, error: Error) {
        self.error = Some(error);
    }

    /// The wallet granted access to `accounts`. The first one is adopted.
    pub fn connected(&mut self, accounts: &[eth::Address]) -> Option<Check> {
        if self.connection.is_connected() {
            return None;
        }
        let Some(&address) = accounts.first() else {
            self.error = Some(Error::ConnectionRejected);
            return None;
        };

        self.connection = Connection::Connected(address);
        self.error = None;
        Some(self.begin_check(address))
    }

    /// Handles an account change notification from the wallet.
    ///
    /// An empty list means the wallet disconnected. A new primary account
    /// replaces the current one and restarts the check. Notifications are
    /// ignored while no wallet is connected.
    pub fn accounts_changed(&mut self, accounts: &[eth::Address]) -> Option<Check> {
        let Some(&address) = accounts.first() else {
            self.reset();
            return None;
        };

        match self.connection {
            Connection::Disconnected => None,
            Connection::Connected(current) if current == address => None,
            Connection::Connected(_) => {
                self.connection = Connection::Connected(address);
                Some(self.begin_check(address))
            }
        }
    }

    /// Applies the outcome of a ledger read. Returns `false` if the read
    /// belonged to a superseded check and was discarded.
    pub fn check_completed(
        &mut self,
        id: CheckId,
        result: Result<eth::Balance, ledger::Error>,
    ) -> bool {
        let Some(check) = self.in_flight.filter(|check| check.id == id) else {
            tracing::debug!(%id, "discarding stale eligibility check");
            return false;
        };
        self.in_flight = None;

        match result {
            Ok(balance) => {
                self.eligibility = Eligibility::from_balance(balance);
                tracing::info!(
                    address = %check.address,
                    %balance,
                    eligibility = ?self.eligibility,
                    "eligibility checked"
                );
            }
            Err(err) => {
                tracing::warn!(address = %check.address, ?err, "eligibility check failed");
                self.eligibility = Eligibility::CheckFailed;
                self.error = Some(Error::ReadFailed);
            }
        }
        true
    }

    /// Returns to the initial, disconnected state. Any check still in flight
    /// becomes stale.
    pub fn reset(&mut self) {
        self.connection = Connection::Disconnected;
        self.eligibility = Eligibility::Unknown;
        self.error = None;
        self.in_flight = None;
    }

    fn begin_check(&mut self, address: eth::Address) -> Check {
        self.last_check += 1;
        let check = Check {
            id: CheckId(self.last_check),
            address,
        };
        self.eligibility = Eligibility::Checking;
        self.error = None;
        self.in_flight = Some(check);
        check
    }
}
