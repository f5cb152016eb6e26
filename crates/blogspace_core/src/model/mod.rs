//! Domain model for the BlogSpace state layer.
//!
//! # Responsibility
//! - Define the canonical post record shared by archive/starred views.
//! - Define the session state and its pure lifecycle transitions.
//!
//! # Invariants
//! - Every post is identified by a stable in-session `PostId`.
//! - Session `user` and `error` are mutually exclusive at rest.

pub mod post;
pub mod session;
