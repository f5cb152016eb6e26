//! Post lifecycle store.
//!
//! # Responsibility
//! - Own the canonical archive and the derived starred index.
//! - Synchronize every mutation through the persistence adapter.
//! - Notify subscribed listeners after each committed mutation.
//!
//! # Invariants
//! - An id is in the starred index iff its archive entry has
//!   `is_starred = true`, and never more than once.
//! - Archive order is append order; view transitions never remove posts.
//! - Deleting from the starred view only unstars; the archive entry stays.

use crate::model::post::{Post, PostId, PostIdAllocator};
use crate::persist::{CollectionKey, KeyValueStore, PersistenceAdapter};
use crate::view::{select_view, View};
use log::{info, warn};

/// Which view initiated a delete; disambiguates the delete semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteContext {
    /// Full removal from the archive and the starred index.
    Archive,
    /// Unstar only; the archive entry survives.
    Starred,
}

impl DeleteContext {
    fn as_str(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Starred => "starred",
        }
    }
}

/// Listener invoked with the new revision after each committed mutation.
pub type ChangeListener = Box<dyn Fn(u64)>;

/// Canonical post collection with persistence synchronization.
///
/// All operations run synchronously on the caller's thread; persistence is
/// fire-and-forget from the store's perspective and a write failure leaves
/// the in-memory state authoritative.
pub struct PostStore<S: KeyValueStore> {
    archive: Vec<Post>,
    starred: Vec<PostId>,
    adapter: PersistenceAdapter<S>,
    ids: PostIdAllocator,
    revision: u64,
    listeners: Vec<ChangeListener>,
}

impl<S: KeyValueStore> PostStore<S> {
    /// Opens the store, rehydrating both collections from the adapter.
    ///
    /// The archive is authoritative: the starred index is rebuilt from its
    /// `is_starred` flags, keeping the persisted star order for ids that
    /// survive reconciliation.
    pub fn open(adapter: PersistenceAdapter<S>) -> Self {
        let archive = adapter.load(CollectionKey::Archive);
        let stored_starred = adapter.load(CollectionKey::Starred);
        let starred = reconcile_starred_index(&archive, &stored_starred);
        let ids = PostIdAllocator::seeded_from(&archive);
        info!(
            "event=store_open module=posts status=ok archived={} starred={}",
            archive.len(),
            starred.len()
        );
        Self {
            archive,
            starred,
            adapter,
            ids,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Publishes a new post at the end of the archive and returns it.
    ///
    /// Title and content are validated by the upstream form layer; the
    /// store itself has no error path here.
    pub fn publish(&mut self, title: impl Into<String>, content: impl Into<String>) -> Post {
        let post = Post::new(self.ids.next_id(), title, content);
        self.archive.push(post.clone());
        info!("event=publish module=posts status=ok id={}", post.id);
        self.commit();
        post
    }

    /// Flips the star flag on one post. Unknown ids are a silent no-op.
    pub fn toggle_star(&mut self, id: PostId) {
        let Some(post) = self.archive.iter_mut().find(|post| post.id == id) else {
            return;
        };
        post.is_starred = !post.is_starred;
        let now_starred = post.is_starred;

        if now_starred {
            // Duplicate prevention is an invariant of the starred index,
            // not an optimization.
            if !self.starred.contains(&id) {
                self.starred.push(id);
            }
        } else {
            self.starred.retain(|starred_id| *starred_id != id);
        }

        info!(
            "event=toggle_star module=posts status=ok id={id} starred={now_starred}"
        );
        self.commit();
    }

    /// Deletes one post with view-dependent semantics.
    ///
    /// From the starred view the post is only unstarred ("delete" there
    /// means remove from the starred listing); from any other view it is
    /// removed entirely. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: PostId, context: DeleteContext) {
        let Some(index) = self.archive.iter().position(|post| post.id == id) else {
            return;
        };

        match context {
            DeleteContext::Starred => self.archive[index].is_starred = false,
            DeleteContext::Archive => {
                self.archive.remove(index);
            }
        }
        self.starred.retain(|starred_id| *starred_id != id);

        info!(
            "event=delete module=posts status=ok id={id} context={}",
            context.as_str()
        );
        self.commit();
    }

    /// Returns the posts the given view displays, in display order.
    pub fn posts_for(&self, view: View) -> Vec<Post> {
        select_view(view, &self.archive, &self.starred)
    }

    /// Full archive in insertion order.
    pub fn archive(&self) -> &[Post] {
        &self.archive
    }

    /// Starred index in star order.
    pub fn starred_ids(&self) -> &[PostId] {
        &self.starred
    }

    /// Gets one post by id.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.archive.iter().find(|post| post.id == id)
    }

    /// Monotone change counter; bumps once per committed mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a listener invoked after each committed mutation, so a UI
    /// layer holding this store can re-render on notification.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn commit(&mut self) {
        let starred_view = self.posts_for(View::Starred);
        if let Err(err) = self.adapter.save_snapshot(&self.archive, &starred_view) {
            // Write failures are non-fatal: in-memory state stays
            // authoritative and a reload may observe stale collections
            // until the next successful write.
            warn!("event=snapshot_save module=posts status=error error={err}");
        }
        self.revision += 1;
        for listener in &self.listeners {
            listener(self.revision);
        }
    }
}

/// Rebuilds the starred index after rehydration.
///
/// Stored star order is kept for ids whose archive entry still carries the
/// flag; archive entries flagged but missing from the stored view are
/// appended so the flag and the index cannot drift apart on load.
fn reconcile_starred_index(archive: &[Post], stored_starred: &[Post]) -> Vec<PostId> {
    let mut index: Vec<PostId> = Vec::new();
    for stored in stored_starred {
        let survives = archive
            .iter()
            .any(|entry| entry.id == stored.id && entry.is_starred);
        if survives && !index.contains(&stored.id) {
            index.push(stored.id);
        }
    }
    for entry in archive {
        if entry.is_starred && !index.contains(&entry.id) {
            index.push(entry.id);
        }
    }
    index
}
