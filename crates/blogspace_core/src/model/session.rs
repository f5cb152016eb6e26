//! Session domain model and pure state transitions.
//!
//! # Responsibility
//! - Hold the authenticated-user state gating the posting features.
//! - Express every auth lifecycle change as a pure transition.
//!
//! # Invariants
//! - `user` and `error` are never both set once a transition resolves; the
//!   only overlap is a stale error kept visible while a retry is in flight.
//! - Failures are terminal for their attempt; there is no retry state.

use serde::{Deserialize, Serialize};

/// Authenticated user payload returned by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Coarse lifecycle phase derived from `SessionState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Initial state, and terminal state after logout.
    Anonymous,
    /// A login/register attempt is in flight.
    Authenticating,
    /// A user is present; posting features are reachable.
    Authenticated,
    /// The last attempt failed; a new submission is required.
    Error,
}

/// Session state container.
///
/// Transitions consume the current state and return the next one, so they
/// can be tested without a store or any I/O around them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Authenticated user, or none.
    pub user: Option<UserProfile>,
    /// Message from the last failed attempt, or none.
    pub error: Option<String>,
    /// Whether an attempt is currently in flight.
    pub is_loading: bool,
}

impl SessionState {
    /// Derives the lifecycle phase. Loading wins over stale error display.
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Authenticating
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else if self.error.is_some() {
            SessionPhase::Error
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Starts a login/register attempt. A prior error stays visible until
    /// the attempt resolves.
    pub fn begin_attempt(self) -> Self {
        Self {
            is_loading: true,
            ..self
        }
    }

    /// Gateway success: records the user, clears any prior error.
    pub fn authenticated(self, user: UserProfile) -> Self {
        Self {
            user: Some(user),
            error: None,
            is_loading: false,
        }
    }

    /// Gateway failure: records the message, clears the loading flag.
    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            user: None,
            error: Some(message.into()),
            is_loading: false,
        }
    }

    /// Logout: back to the anonymous initial state.
    pub fn logged_out(self) -> Self {
        Self::default()
    }
}
