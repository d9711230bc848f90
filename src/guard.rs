use std::sync::{Arc, Mutex, PoisonError};

use crate::{
    navigation::{self, ENTRY_ROUTE},
    session::{Session, SessionStore, Subscription},
};

/// GuardKind
///
/// The two guarded surfaces. `Protected` sits in front of the dashboard subtree and turns
/// anonymous viewers away; `Entry` sits in front of the login screen and sends viewers who
/// already have a session on to their landing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Protected,
    Entry,
}

/// GuardDecision
///
/// Outcome of evaluating a guard against one session snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Redirect(String),
    Render,
}

/// decide
///
/// The guard rule itself, free of any state:
/// - `Protected`: no session -> redirect to `/`; otherwise render.
/// - `Entry`: session with a role -> redirect to that role's landing route; otherwise render
///   the login form.
pub fn decide(kind: GuardKind, session: &Session) -> GuardDecision {
    match (kind, session.role()) {
        (GuardKind::Protected, None) => GuardDecision::Redirect(ENTRY_ROUTE.to_string()),
        (GuardKind::Protected, Some(_)) => GuardDecision::Render,
        (GuardKind::Entry, Some(role)) => {
            GuardDecision::Redirect(navigation::landing_route(role).to_string())
        }
        (GuardKind::Entry, None) => GuardDecision::Render,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Redirecting { to: String },
    Rendering,
}

/// RouteGuard
///
/// The guard state machine. It starts in `Checking` and moves to `Redirecting` or
/// `Rendering` on every evaluation. Children are only rendered in `Rendering`.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    kind: GuardKind,
    state: GuardState,
}

impl RouteGuard {
    pub fn new(kind: GuardKind) -> Self {
        Self {
            kind,
            state: GuardState::Checking,
        }
    }

    pub fn kind(&self) -> GuardKind {
        self.kind
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// evaluate
    ///
    /// Re-runs the guard against `session`. Returns the redirect target when this
    /// evaluation moved the guard into `Redirecting` towards a new destination; staying in
    /// `Redirecting` towards the same target returns `None` so a navigation is issued once.
    pub fn evaluate(&mut self, session: &Session) -> Option<String> {
        let next = match decide(self.kind, session) {
            GuardDecision::Redirect(to) => GuardState::Redirecting { to },
            GuardDecision::Render => GuardState::Rendering,
        };

        if next == self.state {
            return None;
        }
        self.state = next;

        match &self.state {
            GuardState::Redirecting { to } => Some(to.clone()),
            _ => None,
        }
    }

    pub fn renders_children(&self) -> bool {
        self.state == GuardState::Rendering
    }
}

/// Navigator
///
/// Sink for navigation commands. Commands are fire-and-forget: nothing waits for the
/// navigation to complete.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// RecordingNavigator
///
/// A `Navigator` that only remembers the paths it was asked to visit. Used where no real
/// client is attached, and in tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

/// GuardWatcher
///
/// A guard bound to a session store. It evaluates once when attached ("mount") and again
/// after every session mutation, issuing a navigation command whenever it starts
/// redirecting. Dropping the watcher detaches it from the store.
pub struct GuardWatcher {
    guard: Arc<Mutex<RouteGuard>>,
    _subscription: Subscription,
}

impl GuardWatcher {
    pub fn attach(store: &SessionStore, kind: GuardKind, navigator: Arc<dyn Navigator>) -> Self {
        let guard = Arc::new(Mutex::new(RouteGuard::new(kind)));

        let run = {
            let guard = Arc::clone(&guard);
            move |session: &Session| {
                let redirect = guard
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .evaluate(session);
                // Navigate outside the lock; the navigator may read the guard back.
                if let Some(to) = redirect {
                    tracing::debug!(?kind, %to, "guard redirecting");
                    navigator.navigate(&to);
                }
            }
        };

        run(&store.current());
        let subscription = store.subscribe(run);

        Self {
            guard,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> GuardState {
        self.guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state()
            .clone()
    }

    pub fn renders_children(&self) -> bool {
        self.guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .renders_children()
    }
}
