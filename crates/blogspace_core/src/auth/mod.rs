//! Auth gateway contract and wire shapes.
//!
//! # Responsibility
//! - Define the request/response contract the session store consumes.
//! - Extract error messages from failure bodies with stable fallbacks.
//!
//! # Invariants
//! - Gateway internals (transport, cookies, retries) stay outside the core;
//!   only the request/response shape is fixed here.
//! - Every failure carries a human-readable message.

use crate::model::session::UserProfile;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fallback when a login failure body carries no message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Something went wrong";
/// Fallback when a register failure body carries no message.
pub const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed";

/// Credentials payload for `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Failure body shape shared by both auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFailureBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Auth gateway failure surfaced to the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the attempt with a message.
    Rejected(String),
    /// The call never produced a usable response.
    Transport(String),
}

impl AuthError {
    /// Builds a rejection from a failure body, using `fallback` when the
    /// body carries no usable message.
    pub fn from_failure_body(body: &AuthFailureBody, fallback: &str) -> Self {
        let message = body
            .message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback);
        Self::Rejected(message.to_string())
    }

    /// Display text recorded into the session error field.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(message) | Self::Transport(message) => message,
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(message) => write!(f, "{message}"),
            Self::Transport(message) => write!(f, "auth call failed: {message}"),
        }
    }
}

impl Error for AuthError {}

/// Network boundary performing login/register calls.
///
/// Implementations own the transport and any suspension point; the core is
/// synchronous and only consumes the resolved outcome.
pub trait AuthGateway {
    fn login(&self, request: &LoginRequest) -> Result<UserProfile, AuthError>;
    fn register(&self, request: &RegisterRequest) -> Result<UserProfile, AuthError>;
}
