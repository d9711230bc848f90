use neer_manthan::{
    guard::{
        GuardDecision, GuardKind, GuardState, GuardWatcher, RecordingNavigator, RouteGuard, decide,
    },
    session::{Role, Session, SessionStore},
};
use std::sync::Arc;

fn signed_in(role: Role) -> Session {
    let store = SessionStore::new();
    store.login(role, "Tester").unwrap()
}

// --- Pure Decisions ---

#[test]
fn test_protected_redirects_anonymous_viewers_to_entry() {
    assert_eq!(
        decide(GuardKind::Protected, &Session::default()),
        GuardDecision::Redirect("/".to_string())
    );
}

#[test]
fn test_protected_renders_for_every_role() {
    for role in Role::ALL {
        assert_eq!(decide(GuardKind::Protected, &signed_in(role)), GuardDecision::Render);
    }
}

#[test]
fn test_entry_renders_login_form_when_anonymous() {
    assert_eq!(decide(GuardKind::Entry, &Session::default()), GuardDecision::Render);
}

#[test]
fn test_entry_redirects_to_exact_landing_route() {
    let expected = [
        (Role::Public, "/dashboard/public"),
        (Role::Government, "/dashboard/government"),
        (Role::Dealer, "/dashboard/dealer"),
    ];
    for (role, landing) in expected {
        assert_eq!(
            decide(GuardKind::Entry, &signed_in(role)),
            GuardDecision::Redirect(landing.to_string())
        );
    }
}

// --- State Machine ---

#[test]
fn test_guard_starts_checking_and_renders_nothing() {
    let guard = RouteGuard::new(GuardKind::Protected);

    assert_eq!(guard.state(), &GuardState::Checking);
    assert!(!guard.renders_children());
}

#[test]
fn test_guard_suppresses_children_while_redirecting() {
    let mut guard = RouteGuard::new(GuardKind::Protected);
    let redirect = guard.evaluate(&Session::default());

    assert_eq!(redirect.as_deref(), Some("/"));
    assert_eq!(
        guard.state(),
        &GuardState::Redirecting { to: "/".to_string() }
    );
    assert!(!guard.renders_children());
}

#[test]
fn test_guard_reports_a_redirect_once() {
    let mut guard = RouteGuard::new(GuardKind::Protected);

    assert!(guard.evaluate(&Session::default()).is_some());
    assert!(guard.evaluate(&Session::default()).is_none());
}

#[test]
fn test_guard_moves_to_rendering_after_login() {
    let mut guard = RouteGuard::new(GuardKind::Protected);
    guard.evaluate(&Session::default());

    assert_eq!(guard.evaluate(&signed_in(Role::Public)), None);
    assert_eq!(guard.state(), &GuardState::Rendering);
    assert!(guard.renders_children());
}

// --- Subscription-Driven Watchers ---

#[test]
fn test_protected_watcher_redirects_on_mount_when_anonymous() {
    let store = SessionStore::new();
    let navigator = Arc::new(RecordingNavigator::new());

    let watcher = GuardWatcher::attach(&store, GuardKind::Protected, navigator.clone());

    assert!(!watcher.renders_children());
    assert_eq!(navigator.visited(), vec!["/".to_string()]);
}

#[test]
fn test_logout_revokes_a_mounted_protected_view() {
    let store = SessionStore::new();
    store.login(Role::Dealer, "Rao").unwrap();
    let navigator = Arc::new(RecordingNavigator::new());

    let watcher = GuardWatcher::attach(&store, GuardKind::Protected, navigator.clone());
    assert!(watcher.renders_children());
    assert!(navigator.visited().is_empty());

    store.logout();

    assert!(!watcher.renders_children());
    assert_eq!(navigator.last().as_deref(), Some("/"));
}

#[test]
fn test_entry_watcher_follows_login_to_landing_route() {
    let store = SessionStore::new();
    let navigator = Arc::new(RecordingNavigator::new());

    let watcher = GuardWatcher::attach(&store, GuardKind::Entry, navigator.clone());
    assert_eq!(watcher.state(), GuardState::Rendering);

    store.login(Role::Government, "Asha").unwrap();

    assert_eq!(
        watcher.state(),
        GuardState::Redirecting {
            to: "/dashboard/government".to_string()
        }
    );
    assert_eq!(navigator.visited(), vec!["/dashboard/government".to_string()]);
}

#[test]
fn test_entry_watcher_redirects_again_after_relogin() {
    let store = SessionStore::new();
    let navigator = Arc::new(RecordingNavigator::new());
    let _watcher = GuardWatcher::attach(&store, GuardKind::Entry, navigator.clone());

    store.login(Role::Public, "Meena").unwrap();
    store.logout();
    store.login(Role::Dealer, "Rao").unwrap();

    assert_eq!(
        navigator.visited(),
        vec!["/dashboard/public".to_string(), "/dashboard/dealer".to_string()]
    );
}

#[test]
fn test_dropped_watcher_stops_navigating() {
    let store = SessionStore::new();
    store.login(Role::Public, "Meena").unwrap();
    let navigator = Arc::new(RecordingNavigator::new());

    let watcher = GuardWatcher::attach(&store, GuardKind::Protected, navigator.clone());
    drop(watcher);
    store.logout();

    assert!(navigator.visited().is_empty());
}

#[test]
fn test_watcher_agrees_with_store_after_concurrent_writes() {
    let store = Arc::new(SessionStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let watcher = GuardWatcher::attach(&store, GuardKind::Protected, navigator.clone());

    let writers: Vec<_> = Role::ALL
        .into_iter()
        .enumerate()
        .map(|(index, role)| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    store.login(role, "Writer").unwrap();
                    store.logout();
                }
                if index == 0 {
                    store.login(role, "Writer").unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(watcher.renders_children(), store.is_authenticated());
}
