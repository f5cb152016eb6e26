//! State containers owning and gating the post collections.
//!
//! # Responsibility
//! - Orchestrate mutations, persistence synchronization and change
//!   notifications behind explicit, independently testable containers.
//! - Keep UI layers decoupled from storage and transport details.

pub mod post_store;
pub mod session_store;
