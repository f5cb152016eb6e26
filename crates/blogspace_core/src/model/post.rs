//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical post record for the archive and starred views.
//! - Own monotonic id assignment for in-session uniqueness.
//!
//! # Invariants
//! - `id` is unique within a session and strictly increasing.
//! - `created_at` is immutable after publish.
//! - `is_starred` is the only field that mutates after publish.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable identifier for a published post.
///
/// Time-of-creation based (epoch milliseconds), bumped past the last issued
/// value when two publishes land in the same millisecond.
pub type PostId = i64;

/// Canonical post record.
///
/// Serialized field names keep the original storage shape (`createdAt`,
/// `isStarred`) so previously persisted collections stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique in-session id, assigned at publish time.
    pub id: PostId,
    /// Post headline. Non-empty by upstream form validation.
    pub title: String,
    /// Post body. Non-empty by upstream form validation.
    pub content: String,
    /// Publish timestamp in epoch milliseconds. Never mutated.
    pub created_at: i64,
    /// Star flag; drives membership in the starred view.
    pub is_starred: bool,
}

impl Post {
    /// Creates a freshly published post with the current timestamp.
    pub fn new(id: PostId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_created_at(id, title, content, now_epoch_ms())
    }

    /// Creates a post with an explicit timestamp.
    ///
    /// Used by rehydration paths and tests where identity and timing already
    /// exist in storage.
    pub fn with_created_at(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_at,
            is_starred: false,
        }
    }
}

/// Allocates post ids that are time-derived yet strictly increasing.
#[derive(Debug, Default)]
pub struct PostIdAllocator {
    last_issued: PostId,
}

impl PostIdAllocator {
    /// Seeds the allocator so future ids never collide with loaded posts.
    pub fn seeded_from(posts: &[Post]) -> Self {
        let last_issued = posts.iter().map(|post| post.id).max().unwrap_or(0);
        Self { last_issued }
    }

    /// Issues the next id: current wall clock, or one past the last issued
    /// id when the clock has not advanced.
    pub fn next_id(&mut self) -> PostId {
        let candidate = now_epoch_ms();
        let id = if candidate > self.last_issued {
            candidate
        } else {
            self.last_issued + 1
        };
        self.last_issued = id;
        id
    }
}

/// Current wall clock in epoch milliseconds. Pre-epoch clocks read as 0.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
