// --- File: crates/waturnos_common/src/session.rs ---
//! Explicit session context shared by the components that need the active
//! provider identity and bearer token.
//!
//! The session is a value passed by handle; changes are observed through a
//! typed watch channel, so subscribers get a compile-time payload shape
//! instead of a stringly-typed event bus.

use tokio::sync::watch;

/// A snapshot of the session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// The provider whose agenda is being viewed, if one is selected.
    pub provider_id: Option<i64>,
    /// Bearer token for the backend, absent before login.
    pub token: Option<String>,
    /// Set when the backend rejected the token (401/403). The outer shell
    /// decides what to do about it; the fetch pipeline only reports it.
    pub expired: bool,
}

/// Shared, observable session context.
///
/// Cloning the handle is cheap; all clones point at the same state.
#[derive(Debug, Clone)]
pub struct Session {
    tx: watch::Sender<SessionState>,
}

impl Session {
    pub fn new(initial: SessionState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Session { tx }
    }

    /// Subscribe to session changes. Every mutation below notifies
    /// subscribers with the full new state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// The current state, by value.
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn provider_id(&self) -> Option<i64> {
        self.tx.borrow().provider_id
    }

    pub fn token(&self) -> Option<String> {
        self.tx.borrow().token.clone()
    }

    /// Select a different provider (or none).
    pub fn set_provider(&self, provider_id: Option<i64>) {
        self.tx.send_modify(|state| state.provider_id = provider_id);
    }

    /// Install a fresh token, clearing any previous expiry.
    pub fn sign_in(&self, token: String) {
        self.tx.send_modify(|state| {
            state.token = Some(token);
            state.expired = false;
        });
    }

    /// Mark the session expired without dropping the provider selection.
    pub fn expire(&self) {
        self.tx.send_modify(|state| {
            state.token = None;
            state.expired = true;
        });
    }

    /// Full teardown: drops the provider selection and the token.
    pub fn sign_out(&self) {
        self.tx.send_replace(SessionState::default());
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionState::default())
    }
}
