use {
    super::{ledger, session, wallet},
    crate::{
        domain::eligibility::{Connection, Eligibility, Error, Session, Verdict},
        infra::{
            ledger::{self as infra_ledger, MockLedger},
            wallet::{self as infra_wallet, MockProvider},
        },
        tests,
    },
    std::sync::Arc,
};

#[tokio::test]
async fn holder_with_tokens_is_eligible() {
    let holder = tests::address(1);
    let (wallet, _notifications) = wallet(vec![holder]);
    let mut session = session(wallet, ledger(&[(holder, 3)]));
    assert_eq!(session.controller().eligibility(), Eligibility::Unknown);

    session.connect().await;
    assert_eq!(session.controller().connection(), Connection::Connected(holder));
    assert_eq!(session.controller().eligibility(), Eligibility::Checking);
    assert_eq!(session.controller().verdict(), Verdict::Pending);

    session.settle().await;
    assert_eq!(session.controller().eligibility(), Eligibility::Eligible);
    assert_eq!(session.controller().verdict(), Verdict::Eligible);
    assert_eq!(session.controller().error(), None);
}

#[tokio::test]
async fn holder_without_tokens_is_not_eligible() {
    let holder = tests::address(1);
    let (wallet, _notifications) = wallet(vec![holder]);
    let mut session = session(wallet, ledger(&[(holder, 0)]));

    session.connect().await;
    session.settle().await;
    assert_eq!(session.controller().eligibility(), Eligibility::NotEligible);
    assert_eq!(session.controller().verdict(), Verdict::NotEligible);
}

#[tokio::test]
async fn failed_read_is_shown_as_not_eligible() {
    let holder = tests::address(1);
    let (wallet, _notifications) = wallet(vec![holder]);
    let mut ledger = MockLedger::new();
    ledger
        .expect_balance_of()
        .times(1)
        .returning(|_| Err(infra_ledger::Error::Timeout));
    let mut session = session(wallet, ledger);

    session.connect().await;
    session.settle().await;
    assert_eq!(session.controller().eligibility(), Eligibility::CheckFailed);
    assert_eq!(session.controller().verdict(), Verdict::NotEligible);
    assert_eq!(session.controller().error(), Some(Error::ReadFailed));
    assert_eq!(
        Error::ReadFailed.to_string(),
        "Failed to check eligibility"
    );
}

#[tokio::test]
async fn connecting_twice_is_a_no_op() {
    let holder = tests::address(1);
    // Both mocks only allow a single call.
    let (wallet, _notifications) = wallet(vec![holder]);
    let mut session = session(wallet, ledger(&[(holder, 1)]));

    session.connect().await;
    session.settle().await;
    session.connect().await;
    assert_eq!(session.reads_in_flight(), 0);
    assert_eq!(session.controller().connection(), Connection::Connected(holder));
    assert_eq!(session.controller().eligibility(), Eligibility::Eligible);
}

#[tokio::test]
async fn missing_provider_never_connects() {
    let mut ledger = MockLedger::new();
    ledger.expect_balance_of().never();
    let mut session = Session::new(None, Arc::new(ledger));

    session.connect().await;
    assert_eq!(session.controller().connection(), Connection::Disconnected);
    assert_eq!(session.controller().eligibility(), Eligibility::Unknown);
    assert_eq!(
        session.controller().error(),
        Some(Error::ProviderUnavailable)
    );
    assert!(!session.next().await);
}

#[tokio::test]
async fn rejected_connection_can_be_retried() {
    let holder = tests::address(1);
    let mut wallet = MockProvider::new();
    let mut sequence = mockall::Sequence::new();
    wallet
        .expect_request_accounts()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|| Err(infra_wallet::Error::Rejected("User rejected".into())));
    wallet
        .expect_request_accounts()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(move || Ok(vec![holder]));
    wallet
        .expect_subscribe()
        .times(1)
        .returning(infra_wallet::Subscription::closed);
    let mut session = session(wallet, ledger(&[(holder, 2)]));

    session.connect().await;
    assert_eq!(session.controller().connection(), Connection::Disconnected);
    assert_eq!(
        session.controller().error(),
        Some(Error::ConnectionRejected)
    );
    assert_eq!(session.reads_in_flight(), 0);

    session.connect().await;
    assert_eq!(session.controller().error(), None);
    session.settle().await;
    assert_eq!(session.controller().eligibility(), Eligibility::Eligible);
}

#[tokio::test]
async fn wallet_without_accounts_is_rejected() {
    let mut wallet = MockProvider::new();
    wallet
        .expect_request_accounts()
        .times(1)
        .returning(|| Ok(vec![]));
    wallet.expect_subscribe().never();
    let mut ledger = MockLedger::new();
    ledger.expect_balance_of().never();
    let mut session = session(wallet, ledger);

    session.connect().await;
    assert_eq!(session.controller().connection(), Connection::Disconnected);
    assert_eq!(
        session.controller().error(),
        Some(Error::ConnectionRejected)
    );
}
