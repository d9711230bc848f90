use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};

use crate::{
    guard::{self, GuardDecision, GuardKind},
    session::{Identity, SessionState},
};

/// ActiveSession Extractor Result
///
/// The identity behind a request to the protected area. Handlers take it as an argument
/// to learn who is viewing and with which role.
#[derive(Debug, Clone)]
pub struct ActiveSession(pub Identity);

/// ActiveSession Extractor Implementation
///
/// Runs the protected-area guard against the current session snapshot. An anonymous
/// viewer is rejected with a `303 See Other` to the entry route, so no protected content
/// is ever produced for them. Every request re-evaluates, which means a logout revokes
/// access on the very next request.
impl<S> FromRequestParts<S> for ActiveSession
where
    S: Send + Sync,
    SessionState: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = SessionState::from_ref(state);
        let session = store.current();

        match guard::decide(GuardKind::Protected, &session) {
            GuardDecision::Render => match session.identity() {
                Some(identity) => Ok(ActiveSession(identity.clone())),
                None => Err(Redirect::to(crate::navigation::ENTRY_ROUTE)),
            },
            GuardDecision::Redirect(to) => {
                tracing::debug!(path = %parts.uri.path(), %to, "anonymous viewer redirected");
                Err(Redirect::to(&to))
            }
        }
    }
}
