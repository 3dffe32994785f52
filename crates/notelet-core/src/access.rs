//! Access-control evaluation for notes.
//!
//! These functions are the single authority on who may read, write, or
//! enumerate a note. They are pure: callers resolve the share relation
//! (does a `SharedNote(note, requester)` row exist?) and the shared-set
//! before asking for a decision, so the rules stay checkable without a
//! database.
//!
//! Read access: owner, explicit share, or `public` visibility.
//! Write access (update/delete/share): owner only. Visibility never
//! grants write.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Note, NoteId, StatusFilter, UserId, Visibility};

/// What a requester can do with a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Whether the requester can read the note.
    pub read: bool,
    /// Whether the requester can update, delete, or share the note.
    pub write: bool,
}

impl Permissions {
    /// Evaluate the full permission set for a (requester, note) pair.
    ///
    /// `shared_with_requester` is whether a share relation exists for
    /// (note, requester).
    #[must_use]
    pub fn evaluate(requester: UserId, note: &Note, shared_with_requester: bool) -> Self {
        Self {
            read: can_read(requester, note, shared_with_requester),
            write: can_write(requester, note),
        }
    }
}

/// True if the requester may read the note: owner, explicitly shared
/// with, or the note is public.
#[must_use]
pub fn can_read(requester: UserId, note: &Note, shared_with_requester: bool) -> bool {
    note.owner == requester || shared_with_requester || note.visibility == Visibility::Public
}

/// True only if the requester owns the note. Shared or public visibility
/// never grants write access.
#[must_use]
pub fn can_write(requester: UserId, note: &Note) -> bool {
    note.owner == requester
}

/// The listing predicate: whether `note` appears for `requester` under
/// the given status filter.
///
/// `shared_set` is the set of note ids explicitly shared with the
/// requester. Filter semantics:
///
/// - `None` or `All`: owned by the requester, or in the shared set.
/// - `Shared`: in the shared set AND tagged `shared`. The requester's own
///   notes are excluded even when self-tagged `shared`.
/// - `Private` / `Public`: owned by the requester AND tagged accordingly.
///   Notes shared with the requester never appear here, even when the
///   tag happens to match.
#[must_use]
pub fn visible_under(
    note: &Note,
    requester: UserId,
    shared_set: &HashSet<NoteId>,
    filter: Option<StatusFilter>,
) -> bool {
    let owned = note.owner == requester;
    let shared = shared_set.contains(&note.id);

    match filter {
        None | Some(StatusFilter::All) => owned || shared,
        Some(StatusFilter::Shared) => shared && note.visibility == Visibility::Shared,
        Some(StatusFilter::Private) => owned && note.visibility == Visibility::Private,
        Some(StatusFilter::Public) => owned && note.visibility == Visibility::Public,
    }
}

/// Case-insensitive substring match against a note's title and tags.
#[must_use]
pub fn matches_search(title: &str, tags: Option<&str>, query: &str) -> bool {
    let needle = query.to_lowercase();
    title.to_lowercase().contains(&needle)
        || tags
            .map(|t| t.to_lowercase().contains(&needle))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(owner: UserId, visibility: Visibility) -> Note {
        Note::new("title", "content", None, visibility, owner)
    }

    #[test]
    fn owner_can_read_and_write() {
        let owner = UserId::new();
        let n = note(owner, Visibility::Private);
        assert!(can_read(owner, &n, false));
        assert!(can_write(owner, &n));
    }

    #[test]
    fn stranger_cannot_read_private() {
        let n = note(UserId::new(), Visibility::Private);
        assert!(!can_read(UserId::new(), &n, false));
    }

    #[test]
    fn shared_relation_grants_read() {
        let n = note(UserId::new(), Visibility::Private);
        assert!(can_read(UserId::new(), &n, true));
    }

    #[test]
    fn public_grants_read_to_anyone() {
        let n = note(UserId::new(), Visibility::Public);
        assert!(can_read(UserId::new(), &n, false));
    }

    #[test]
    fn non_owner_never_writes() {
        let requester = UserId::new();
        for visibility in [Visibility::Private, Visibility::Shared, Visibility::Public] {
            let n = note(UserId::new(), visibility);
            assert!(!can_write(requester, &n));
            // Even an explicit share grants read only.
            let perms = Permissions::evaluate(requester, &n, true);
            assert!(perms.read);
            assert!(!perms.write);
        }
    }

    #[test]
    fn evaluate_matches_individual_checks() {
        let owner = UserId::new();
        let n = note(owner, Visibility::Shared);
        let perms = Permissions::evaluate(owner, &n, false);
        assert!(perms.read);
        assert!(perms.write);
    }

    // Listing scenario: A(owner=u1, private), B(owner=u1, shared,
    // shared-with u2), C(owner=u2, public).
    fn listing_fixture() -> (UserId, UserId, Note, Note, Note, HashSet<NoteId>) {
        let u1 = UserId::new();
        let u2 = UserId::new();
        let a = note(u1, Visibility::Private);
        let b = note(u1, Visibility::Shared);
        let c = note(u2, Visibility::Public);
        let mut shared_with_u2 = HashSet::new();
        shared_with_u2.insert(b.id);
        (u1, u2, a, b, c, shared_with_u2)
    }

    #[test]
    fn unset_filter_lists_owned_notes() {
        let (u1, _, a, b, c, _) = listing_fixture();
        let empty = HashSet::new();
        assert!(visible_under(&a, u1, &empty, None));
        assert!(visible_under(&b, u1, &empty, None));
        assert!(!visible_under(&c, u1, &empty, None));
    }

    #[test]
    fn shared_filter_requires_relation_and_tag() {
        let (_, u2, a, b, c, shared_with_u2) = listing_fixture();
        let f = Some(StatusFilter::Shared);
        assert!(visible_under(&b, u2, &shared_with_u2, f));
        // C is u2's own public note: not shared-with, so excluded.
        assert!(!visible_under(&c, u2, &shared_with_u2, f));
        assert!(!visible_under(&a, u2, &shared_with_u2, f));
    }

    #[test]
    fn shared_filter_excludes_own_self_tagged_notes() {
        let u1 = UserId::new();
        let own_shared = note(u1, Visibility::Shared);
        // Owner's notes are never in their own shared set.
        assert!(!visible_under(
            &own_shared,
            u1,
            &HashSet::new(),
            Some(StatusFilter::Shared)
        ));
    }

    #[test]
    fn all_filter_lists_owned_and_shared() {
        let (_, u2, a, b, c, shared_with_u2) = listing_fixture();
        let f = Some(StatusFilter::All);
        assert!(visible_under(&b, u2, &shared_with_u2, f));
        assert!(visible_under(&c, u2, &shared_with_u2, f));
        assert!(!visible_under(&a, u2, &shared_with_u2, f));
    }

    #[test]
    fn private_filter_restricts_to_owned_with_tag() {
        let u1 = UserId::new();
        let private = note(u1, Visibility::Private);
        let public = note(u1, Visibility::Public);
        let f = Some(StatusFilter::Private);
        assert!(visible_under(&private, u1, &HashSet::new(), f));
        assert!(!visible_under(&public, u1, &HashSet::new(), f));
    }

    #[test]
    fn private_filter_never_lists_foreign_shares() {
        let u2 = UserId::new();
        let foreign = note(UserId::new(), Visibility::Private);
        let mut shared = HashSet::new();
        shared.insert(foreign.id);
        // Shared-with but not owned: excluded under private/public filters
        // even though the visibility tag matches.
        assert!(!visible_under(&foreign, u2, &shared, Some(StatusFilter::Private)));
    }

    #[test]
    fn empty_shared_set_yields_nothing_under_shared() {
        let u2 = UserId::new();
        let n = note(UserId::new(), Visibility::Shared);
        assert!(!visible_under(&n, u2, &HashSet::new(), Some(StatusFilter::Shared)));
    }

    #[test]
    fn search_matches_title_and_tags_case_insensitive() {
        assert!(matches_search("Grocery List", Some("home,errand"), "grocery"));
        assert!(matches_search("Grocery List", Some("home,errand"), "errand"));
        assert!(matches_search("Grocery List", Some("home,errand"), "GROCERY"));
        assert!(!matches_search("Grocery List", Some("home,errand"), "work"));
    }

    #[test]
    fn search_without_tags_only_checks_title() {
        assert!(matches_search("Meeting notes", None, "meeting"));
        assert!(!matches_search("Meeting notes", None, "errand"));
    }
}
