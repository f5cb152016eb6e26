//! Client-side state layer for the BlogSpace single-author blogging tool.
//! This crate is the single source of truth for the post lifecycle and
//! session invariants.

pub mod auth;
pub mod logging;
pub mod model;
pub mod persist;
pub mod store;
pub mod view;

pub use auth::{
    AuthError, AuthFailureBody, AuthGateway, LoginRequest, RegisterRequest,
    LOGIN_FALLBACK_MESSAGE, REGISTER_FALLBACK_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::post::{Post, PostId, PostIdAllocator};
pub use model::session::{SessionPhase, SessionState, UserProfile};
pub use persist::{
    open_kv_db, open_kv_db_in_memory, CollectionKey, FileKeyValueStore, KeyValueStore,
    MemoryKeyValueStore, PersistError, PersistResult, PersistenceAdapter, SqliteKeyValueStore,
};
pub use store::post_store::{ChangeListener, DeleteContext, PostStore};
pub use store::session_store::{SessionListener, SessionStore};
pub use view::{select_view, View};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
