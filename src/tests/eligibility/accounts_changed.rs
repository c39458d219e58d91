use {
    super::{ledger, session, wallet},
    crate::{
        domain::eligibility::{Connection, Eligibility, Session, Verdict},
        tests::{self, mock::ledger::GatedLedger},
    },
    std::sync::Arc,
};

#[tokio::test]
async fn new_account_is_checked_again() {
    let (first, second) = (tests::address(1), tests::address(2));
    let (wallet, notifications) = wallet(vec![first]);
    let mut session = session(wallet, ledger(&[(first, 1), (second, 0)]));

    session.connect().await;
    session.settle().await;
    assert_eq!(session.controller().verdict(), Verdict::Eligible);

    notifications.send(vec![second]).await.unwrap();
    assert!(session.next().await);
    assert_eq!(session.controller().connection(), Connection::Connected(second));
    assert_eq!(session.controller().eligibility(), Eligibility::Checking);
    assert_eq!(session.controller().verdict(), Verdict::Pending);

    session.settle().await;
    assert_eq!(session.controller().eligibility(), Eligibility::NotEligible);
}

#[tokio::test]
async fn same_primary_account_is_not_checked_again() {
    let holder = tests::address(1);
    let (wallet, notifications) = wallet(vec![holder]);
    let mut session = session(wallet, ledger(&[(holder, 1)]));

    session.connect().await;
    session.settle().await;

    notifications
        .send(vec![holder, tests::address(3)])
        .await
        .unwrap();
    assert!(session.next().await);
    assert_eq!(session.reads_in_flight(), 0);
    assert_eq!(session.controller().connection(), Connection::Connected(holder));
    assert_eq!(session.controller().eligibility(), Eligibility::Eligible);
}

#[tokio::test]
async fn empty_account_list_disconnects() {
    let holder = tests::address(1);
    let (wallet, notifications) = wallet(vec![holder]);
    let mut session = session(wallet, ledger(&[(holder, 1)]));

    session.connect().await;
    session.settle().await;

    notifications.send(vec![]).await.unwrap();
    assert!(session.next().await);
    assert_eq!(session.controller().connection(), Connection::Disconnected);
    assert_eq!(session.controller().eligibility(), Eligibility::Unknown);
    assert_eq!(session.controller().verdict(), Verdict::Pending);
    assert_eq!(session.controller().error(), None);

    // Unsubscribed, so nothing else can happen.
    assert!(!session.next().await);
    assert!(session.controller().wants_connection());
}

#[tokio::test]
async fn disconnecting_abandons_pending_check() {
    let holder = tests::address(1);
    let (wallet, notifications) = wallet(vec![holder]);
    let ledger = Arc::new(GatedLedger::default());
    let _gate = ledger.gate(holder);
    let mut session = Session::new(Some(Arc::new(wallet)), ledger);

    session.connect().await;
    assert_eq!(session.reads_in_flight(), 1);

    notifications.send(vec![]).await.unwrap();
    assert!(session.next().await);
    assert_eq!(session.reads_in_flight(), 0);
    assert_eq!(session.controller().eligibility(), Eligibility::Unknown);
    assert_eq!(session.controller().in_flight(), None);
}

#[tokio::test]
async fn closed_notifications_leave_state_untouched() {
    let holder = tests::address(1);
    let (wallet, notifications) = wallet(vec![holder]);
    let mut session = session(wallet, ledger(&[(holder, 4)]));

    session.connect().await;
    session.settle().await;

    drop(notifications);
    assert!(session.next().await);
    assert!(!session.next().await);
    assert_eq!(session.controller().connection(), Connection::Connected(holder));
    assert_eq!(session.controller().eligibility(), Eligibility::Eligible);
}
