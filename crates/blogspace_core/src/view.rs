//! View selection for the three display contexts.
//!
//! # Responsibility
//! - Map a requested view plus store state to the ordered post list.
//!
//! # Invariants
//! - Selection is pure; it never mutates store state.
//! - Archive order is insertion order (oldest published first).
//! - Starred order follows the star index (order posts were starred).

use crate::model::post::{Post, PostId};

/// UI-selectable display context.
///
/// Also disambiguates delete semantics: a delete issued from the starred
/// view only unstars (see `PostStore::delete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The composition form; shows no listing.
    Home,
    /// Every retained post.
    Archive,
    /// Posts currently flagged as starred.
    Starred,
}

impl View {
    /// Stable lowercase name for display and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Archive => "archive",
            Self::Starred => "starred",
        }
    }
}

/// Returns the posts the given view displays, in display order.
pub fn select_view(view: View, archive: &[Post], starred: &[PostId]) -> Vec<Post> {
    match view {
        View::Home => Vec::new(),
        View::Archive => archive.to_vec(),
        View::Starred => starred
            .iter()
            .filter_map(|id| archive.iter().find(|post| post.id == *id))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{select_view, View};
    use crate::model::post::Post;

    fn sample_archive() -> Vec<Post> {
        let mut first = Post::with_created_at(1, "first", "a", 10);
        first.is_starred = true;
        let second = Post::with_created_at(2, "second", "b", 20);
        let mut third = Post::with_created_at(3, "third", "c", 30);
        third.is_starred = true;
        vec![first, second, third]
    }

    #[test]
    fn home_shows_nothing() {
        let archive = sample_archive();
        assert!(select_view(View::Home, &archive, &[1, 3]).is_empty());
    }

    #[test]
    fn archive_preserves_insertion_order() {
        let archive = sample_archive();
        let shown = select_view(View::Archive, &archive, &[1, 3]);
        let ids: Vec<_> = shown.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn starred_follows_star_order_not_archive_order() {
        let archive = sample_archive();
        let shown = select_view(View::Starred, &archive, &[3, 1]);
        let ids: Vec<_> = shown.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn starred_skips_ids_missing_from_archive() {
        let archive = sample_archive();
        let shown = select_view(View::Starred, &archive, &[99, 1]);
        let ids: Vec<_> = shown.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
