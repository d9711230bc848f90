//! Router Module Index
//!
//! Splits the routing table by guard. Access control is attached per module (via an Axum
//! layer in `create_router`), so a handler cannot end up in the open by accident.

/// Routes reachable without a session: the entry screen, sign in and sign out.
pub mod entry;

/// The `/dashboard/*` subtree. Every route here sits behind the protected-area guard.
pub mod dashboard;
