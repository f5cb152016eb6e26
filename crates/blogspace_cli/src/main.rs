//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive a scripted post lifecycle against the in-memory backend to
//!   verify `blogspace_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use blogspace_core::{DeleteContext, MemoryKeyValueStore, PersistenceAdapter, PostStore, View};

fn main() {
    let adapter = PersistenceAdapter::new(MemoryKeyValueStore::new());
    let mut store = PostStore::open(adapter);

    let first = store.publish("Hello", "First post from the smoke CLI");
    let second = store.publish("Again", "Second post from the smoke CLI");
    store.toggle_star(first.id);
    store.delete(second.id, DeleteContext::Archive);

    println!("blogspace_core version={}", blogspace_core::core_version());
    for view in [View::Home, View::Archive, View::Starred] {
        println!(
            "view={} posts={}",
            view.as_str(),
            store.posts_for(view).len()
        );
    }
    println!("revision={}", store.revision());
}
