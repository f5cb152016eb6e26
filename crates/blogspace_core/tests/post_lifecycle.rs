use blogspace_core::{
    DeleteContext, MemoryKeyValueStore, PersistenceAdapter, PostStore, View,
};
use std::cell::Cell;
use std::rc::Rc;

fn memory_store() -> PostStore<MemoryKeyValueStore> {
    PostStore::open(PersistenceAdapter::new(MemoryKeyValueStore::new()))
}

#[test]
fn publish_appends_in_order_oldest_first() {
    let mut store = memory_store();
    let a = store.publish("A", "first");
    let b = store.publish("B", "second");

    let shown = store.posts_for(View::Archive);
    let ids: Vec<_> = shown.iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    assert!(a.id < b.id);
}

#[test]
fn published_post_starts_unstarred_with_timestamp() {
    let mut store = memory_store();
    let post = store.publish("Hi", "World");

    assert!(!post.is_starred);
    assert!(post.created_at > 0);
    assert!(store.posts_for(View::Starred).is_empty());
}

#[test]
fn toggle_star_twice_restores_original_state() {
    let mut store = memory_store();
    let post = store.publish("Hi", "World");

    store.toggle_star(post.id);
    assert!(store.get(post.id).unwrap().is_starred);
    assert_eq!(store.starred_ids(), &[post.id]);

    store.toggle_star(post.id);
    assert!(!store.get(post.id).unwrap().is_starred);
    assert!(store.starred_ids().is_empty());
}

#[test]
fn starred_index_never_holds_duplicates() {
    let mut store = memory_store();
    let post = store.publish("Hi", "World");

    for _ in 0..5 {
        store.toggle_star(post.id);
    }

    let starred: Vec<_> = store
        .starred_ids()
        .iter()
        .filter(|id| **id == post.id)
        .collect();
    assert!(starred.len() <= 1);
    assert_eq!(store.starred_ids(), &[post.id]);
}

#[test]
fn toggle_star_on_unknown_id_is_a_noop() {
    let mut store = memory_store();
    store.publish("Hi", "World");
    let before = store.revision();

    store.toggle_star(-1);

    assert_eq!(store.revision(), before);
    assert!(store.starred_ids().is_empty());
}

#[test]
fn delete_from_starred_view_only_unstars() {
    let mut store = memory_store();
    let post = store.publish("Hi", "World");
    store.toggle_star(post.id);

    store.delete(post.id, DeleteContext::Starred);

    let kept = store.get(post.id).expect("post must stay in the archive");
    assert!(!kept.is_starred);
    assert!(store.posts_for(View::Starred).is_empty());
}

#[test]
fn delete_from_archive_view_removes_entirely() {
    let mut store = memory_store();
    let post = store.publish("Hi", "World");
    store.toggle_star(post.id);

    store.delete(post.id, DeleteContext::Archive);

    assert!(store.get(post.id).is_none());
    assert!(store.posts_for(View::Archive).is_empty());
    assert!(store.posts_for(View::Starred).is_empty());
}

#[test]
fn delete_on_unknown_id_is_a_noop() {
    let mut store = memory_store();
    let post = store.publish("Hi", "World");
    let before = store.revision();

    store.delete(post.id + 1, DeleteContext::Archive);
    store.delete(post.id + 1, DeleteContext::Starred);

    assert_eq!(store.revision(), before);
    assert_eq!(store.posts_for(View::Archive).len(), 1);
}

#[test]
fn home_view_is_always_empty() {
    let mut store = memory_store();
    store.publish("Hi", "World");
    store.publish("More", "Content");

    assert!(store.posts_for(View::Home).is_empty());
}

#[test]
fn starred_view_follows_star_order() {
    let mut store = memory_store();
    let a = store.publish("A", "first");
    let b = store.publish("B", "second");

    store.toggle_star(b.id);
    store.toggle_star(a.id);

    let ids: Vec<_> = store
        .posts_for(View::Starred)
        .iter()
        .map(|post| post.id)
        .collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[test]
fn full_lifecycle_scenario() {
    let mut store = memory_store();

    let post = store.publish("Hi", "World");
    let archive = store.posts_for(View::Archive);
    assert_eq!(archive.len(), 1);
    assert_eq!(archive[0].title, "Hi");
    assert_eq!(archive[0].content, "World");
    assert!(!archive[0].is_starred);
    assert!(store.posts_for(View::Starred).is_empty());

    store.toggle_star(post.id);
    assert!(store.posts_for(View::Archive)[0].is_starred);
    assert_eq!(store.posts_for(View::Starred).len(), 1);
    assert_eq!(store.posts_for(View::Starred)[0].id, post.id);

    store.delete(post.id, DeleteContext::Starred);
    assert!(!store.posts_for(View::Archive)[0].is_starred);
    assert!(store.posts_for(View::Starred).is_empty());

    store.delete(post.id, DeleteContext::Archive);
    assert!(store.posts_for(View::Archive).is_empty());
}

#[test]
fn listeners_are_notified_once_per_mutation() {
    let mut store = memory_store();
    let seen = Rc::new(Cell::new(0u64));
    let seen_by_listener = Rc::clone(&seen);
    store.subscribe(Box::new(move |revision| seen_by_listener.set(revision)));

    let post = store.publish("Hi", "World");
    assert_eq!(seen.get(), 1);

    store.toggle_star(post.id);
    assert_eq!(seen.get(), 2);

    store.delete(post.id, DeleteContext::Archive);
    assert_eq!(seen.get(), 3);
    assert_eq!(store.revision(), 3);
}
