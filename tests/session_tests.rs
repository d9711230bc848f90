use neer_manthan::session::{Role, Session, SessionError, SessionStore};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// --- Login / Logout Contract ---

#[test]
fn test_login_sets_role_and_name_for_every_role() {
    for role in Role::ALL {
        let store = SessionStore::new();
        let session = store.login(role, "Asha").expect("login should succeed");

        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(role));
        assert_eq!(store.display_name(), "Asha");
        assert_eq!(session.role(), Some(role));
    }
}

#[test]
fn test_login_trims_display_name() {
    let store = SessionStore::new();
    store.login(Role::Dealer, "  Rao \t").unwrap();

    assert_eq!(store.display_name(), "Rao");
}

#[test]
fn test_government_login() {
    let store = SessionStore::new();
    store.login(Role::Government, "Asha").unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.role(), Some(Role::Government));
}

#[test]
fn test_whitespace_name_leaves_session_untouched() {
    let store = SessionStore::new();
    let result = store.login(Role::Public, "   ");

    assert_eq!(result, Err(SessionError::BlankName));
    assert!(!store.is_authenticated());
    assert_eq!(store.current(), Session::default());
}

#[test]
fn test_blank_login_keeps_existing_session() {
    let store = SessionStore::new();
    store.login(Role::Government, "Asha").unwrap();
    let before = store.current();

    assert!(store.login(Role::Dealer, "").is_err());

    // Same identity, same session id.
    assert_eq!(store.current(), before);
}

#[test]
fn test_logout_clears_both_fields() {
    let store = SessionStore::new();
    store.login(Role::Dealer, "Rao").unwrap();
    store.logout();

    assert!(!store.is_authenticated());
    assert_eq!(store.role(), None);
    assert_eq!(store.display_name(), "");
}

#[test]
fn test_logout_is_idempotent() {
    let store = SessionStore::new();
    store.logout();
    store.logout();
    assert!(!store.is_authenticated());

    store.login(Role::Public, "Meena").unwrap();
    store.logout();
    store.logout();
    assert_eq!(store.current(), Session::default());
}

#[test]
fn test_each_login_gets_a_fresh_session_id() {
    let store = SessionStore::new();
    let first = store.login(Role::Public, "Meena").unwrap();
    let second = store.login(Role::Public, "Meena").unwrap();

    assert_ne!(
        first.identity().unwrap().session_id,
        second.identity().unwrap().session_id
    );
}

#[test]
fn test_stores_are_isolated() {
    let a = SessionStore::new();
    let b = SessionStore::new();
    a.login(Role::Government, "Asha").unwrap();

    assert!(a.is_authenticated());
    assert!(!b.is_authenticated());
}

#[test]
fn test_initial_is_uppercased_first_character() {
    let store = SessionStore::new();
    let session = store.login(Role::Public, "asha").unwrap();

    assert_eq!(session.identity().unwrap().initial(), "A");
}

// --- Role Parsing ---

#[test]
fn test_role_round_trips_through_its_name() {
    for role in Role::ALL {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn test_unknown_role_is_rejected() {
    assert_eq!(
        "admin".parse::<Role>(),
        Err(SessionError::UnknownRole("admin".to_string()))
    );
}

// --- Observers ---

#[test]
fn test_observers_see_every_change() {
    let store = SessionStore::new();
    let seen: Arc<Mutex<Vec<Option<Role>>>> = Arc::default();

    let _subscription = store.subscribe({
        let seen = Arc::clone(&seen);
        move |session| seen.lock().unwrap().push(session.role())
    });

    store.login(Role::Government, "Asha").unwrap();
    store.logout();

    assert_eq!(*seen.lock().unwrap(), vec![Some(Role::Government), None]);
}

#[test]
fn test_rejected_login_and_repeated_logout_do_not_notify() {
    let store = SessionStore::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let _subscription = store.subscribe({
        let calls = Arc::clone(&calls);
        move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });

    assert!(store.login(Role::Public, " ").is_err());
    store.logout();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_dropped_subscription_stops_notifications() {
    let store = SessionStore::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let subscription = store.subscribe({
        let calls = Arc::clone(&calls);
        move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    });
    store.login(Role::Public, "Meena").unwrap();
    subscription.cancel();
    store.logout();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_watch_receiver_wakes_on_login() {
    let store = SessionStore::new();
    let mut receiver = store.watch();

    store.login(Role::Dealer, "Rao").unwrap();

    receiver.changed().await.expect("store is alive");
    assert_eq!(receiver.borrow().role(), Some(Role::Dealer));
}

#[test]
fn test_concurrent_writers_notify_in_store_order() {
    let store = Arc::new(SessionStore::new());
    let last_seen: Arc<Mutex<Option<Option<Role>>>> = Arc::default();

    let _subscription = store.subscribe({
        let last_seen = Arc::clone(&last_seen);
        move |session| *last_seen.lock().unwrap() = Some(session.role())
    });

    let writers: Vec<_> = Role::ALL
        .into_iter()
        .map(|role| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    store.login(role, "Writer").unwrap();
                    store.logout();
                    store.login(role, "Writer").unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    // The last notification is the last stored value.
    assert_eq!(*last_seen.lock().unwrap(), Some(store.role()));
}
