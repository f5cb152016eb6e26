//! Session store driving auth lifecycle transitions.
//!
//! # Responsibility
//! - Apply pure `SessionState` transitions from gateway outcomes.
//! - Expose the boolean gate used by the routing guard.
//!
//! # Invariants
//! - A failure is terminal for its attempt; the store never retries.
//! - Logout never touches post state or persisted collections.
//! - Preventing re-submission while authenticating is the caller's job.

use crate::auth::{AuthError, AuthGateway, LoginRequest, RegisterRequest};
use crate::model::session::{SessionPhase, SessionState, UserProfile};
use log::{info, warn};

/// Listener invoked with the new state after each transition.
pub type SessionListener = Box<dyn Fn(&SessionState)>;

/// Session state container gating access to the posting features.
#[derive(Default)]
pub struct SessionStore {
    state: SessionState,
    revision: u64,
    listeners: Vec<SessionListener>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Derived lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Route-guard check: whether the posting features are reachable.
    pub fn is_authenticated(&self) -> bool {
        self.state.user.is_some()
    }

    /// Monotone change counter; bumps once per transition.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener invoked after each transition.
    pub fn subscribe(&mut self, listener: SessionListener) {
        self.listeners.push(listener);
    }

    /// Runs one login attempt through the gateway.
    ///
    /// The result is also returned so an external notification channel can
    /// react without reading the state back.
    pub fn login(
        &mut self,
        gateway: &dyn AuthGateway,
        request: &LoginRequest,
    ) -> Result<(), AuthError> {
        self.transition(SessionState::begin_attempt);
        match gateway.login(request) {
            Ok(user) => {
                info!("event=login module=session status=ok");
                self.apply_success(user);
                Ok(())
            }
            Err(err) => {
                warn!("event=login module=session status=error error={err}");
                self.apply_failure(&err);
                Err(err)
            }
        }
    }

    /// Runs one register attempt through the gateway.
    pub fn register(
        &mut self,
        gateway: &dyn AuthGateway,
        request: &RegisterRequest,
    ) -> Result<(), AuthError> {
        self.transition(SessionState::begin_attempt);
        match gateway.register(request) {
            Ok(user) => {
                info!("event=register module=session status=ok");
                self.apply_success(user);
                Ok(())
            }
            Err(err) => {
                warn!("event=register module=session status=error error={err}");
                self.apply_failure(&err);
                Err(err)
            }
        }
    }

    /// Clears the authenticated user. Post state is untouched; any
    /// server-side invalidation is an external collaborator concern.
    pub fn logout(&mut self) {
        info!("event=logout module=session status=ok");
        self.transition(SessionState::logged_out);
    }

    fn apply_success(&mut self, user: UserProfile) {
        self.transition(|state| state.authenticated(user));
    }

    fn apply_failure(&mut self, err: &AuthError) {
        let message = err.message().to_string();
        self.transition(move |state| state.failed(message));
    }

    fn transition(&mut self, apply: impl FnOnce(SessionState) -> SessionState) {
        self.state = apply(std::mem::take(&mut self.state));
        self.revision += 1;
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}
