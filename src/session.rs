use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    sync::{
        Arc, Mutex, PoisonError, Weak,
        atomic::{AtomicU64, Ordering},
    },
};
use tokio::sync::watch;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// Role
///
/// The three viewer roles. The role decides which navigation menu and landing page a
/// session resolves to. Serialized in lowercase (`"public"`, `"government"`, `"dealer"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Public,
    Government,
    Dealer,
}

impl Role {
    /// Every role, in the order the login screen offers them.
    pub const ALL: [Role; 3] = [Role::Public, Role::Government, Role::Dealer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Government => "government",
            Role::Dealer => "dealer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| SessionError::UnknownRole(s.to_string()))
    }
}

/// SessionError
///
/// Failure modes of the session store. `BlankName` is the only one a viewer can trigger;
/// `UnknownRole` means a caller built a role from an unchecked string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter your name to continue.")]
    BlankName,
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

/// Identity
///
/// The authenticated half of a session. Role and display name only ever exist together,
/// which is what keeps "role is set" and "name is non-empty" in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub role: Role,
    pub display_name: String,
    /// Fresh for every successful login; used to correlate log lines.
    pub session_id: Uuid,
    pub signed_in_at: DateTime<Utc>,
}

impl Identity {
    /// First character of the display name, uppercased. Shown as the avatar.
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Session
///
/// Snapshot of the current viewer. `identity == None` is the "unset" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// Empty while logged out.
    pub fn display_name(&self) -> &str {
        self.identity
            .as_ref()
            .map(|identity| identity.display_name.as_str())
            .unwrap_or("")
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

type Observer = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<Vec<(u64, Observer)>>,
}

impl ObserverRegistry {
    fn register(&self, observer: Observer) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    fn unregister(&self, id: u64) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(observer_id, _)| *observer_id != id);
    }

    fn notify(&self, session: &Session) {
        // Copy the list first: observers may subscribe or cancel from inside the callback.
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        for observer in observers {
            observer(session);
        }
    }
}

/// SessionStore
///
/// The single in-memory viewer session, owned explicitly and injected wherever it is
/// needed (through `AppState` in the HTTP layer, directly in tests). There is no global:
/// two stores never share state.
///
/// The session lives in one `watch` cell so that both halves of the identity change in a
/// single write. Dependents either register a synchronous observer with [`subscribe`]
/// or hold an async receiver from [`watch`].
///
/// Writes are serialized: each mutation and the notification of its snapshot happen under
/// one writer lock, so observers see changes in the order they were stored. Observers run
/// while that lock is held and must not call `login` or `logout` on the same store.
///
/// [`subscribe`]: SessionStore::subscribe
/// [`watch`]: SessionStore::watch
pub struct SessionStore {
    cell: watch::Sender<Session>,
    registry: Arc<ObserverRegistry>,
    writer: Mutex<()>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// A store in the logged-out state.
    pub fn new() -> Self {
        let (cell, _) = watch::channel(Session::default());
        Self {
            cell,
            registry: Arc::new(ObserverRegistry::default()),
            writer: Mutex::new(()),
        }
    }

    /// login
    ///
    /// Sets role and display name together. The name is trimmed; a name that is blank
    /// after trimming is rejected with `SessionError::BlankName` and the session is left
    /// exactly as it was (no observer runs).
    pub fn login(&self, role: Role, name: &str) -> Result<Session, SessionError> {
        let display_name = name.trim();
        if display_name.is_empty() {
            tracing::debug!(%role, "login rejected: blank display name");
            return Err(SessionError::BlankName);
        }

        let identity = Identity {
            role,
            display_name: display_name.to_string(),
            session_id: Uuid::new_v4(),
            signed_in_at: Utc::now(),
        };
        tracing::info!(
            %role,
            display_name = %identity.display_name,
            session_id = %identity.session_id,
            "viewer signed in"
        );

        let session = Session {
            identity: Some(identity),
        };
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.cell.send_replace(session.clone());
        self.registry.notify(&session);
        Ok(session)
    }

    /// logout
    ///
    /// Clears the session. Logging out while already logged out is a no-op: the end state
    /// is identical and observers are not woken a second time.
    pub fn logout(&self) {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let changed = self.cell.send_if_modified(|session| {
            match session.identity.take() {
                Some(identity) => {
                    tracing::info!(
                        role = %identity.role,
                        session_id = %identity.session_id,
                        "viewer signed out"
                    );
                    true
                }
                None => false,
            }
        });

        if changed {
            self.registry.notify(&Session::default());
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.borrow().is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.cell.borrow().role()
    }

    pub fn display_name(&self) -> String {
        self.cell.borrow().display_name().to_string()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.cell.borrow().clone()
    }

    /// subscribe
    ///
    /// Registers `observer` to run after every session mutation, receiving the new
    /// snapshot. The returned `Subscription` unregisters the observer when dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = self.registry.register(Arc::new(observer));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// An async receiver that wakes on every session change.
    pub fn watch(&self) -> watch::Receiver<Session> {
        self.cell.subscribe()
    }
}

/// Subscription
///
/// Handle for a registered session observer.
#[must_use = "dropping a Subscription unregisters its observer"]
pub struct Subscription {
    id: u64,
    registry: Weak<ObserverRegistry>,
}

impl Subscription {
    /// Unregisters the observer now rather than at drop.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(self.id);
        }
    }
}

/// SessionState
///
/// The concrete type used to share the session store across the application state.
pub type SessionState = Arc<SessionStore>;
