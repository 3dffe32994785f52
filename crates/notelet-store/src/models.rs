//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in notelet-core to
//! keep the domain layer free of database concerns; `visibility` travels
//! as TEXT and is parsed at the boundary.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use notelet_core::{Note, NoteId, StatusFilter, UserId, Visibility};

use crate::error::{StoreError, StoreResult};

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    /// Stored lowercase, unique.
    pub email: String,
    /// Argon2 hash; never serialized outward.
    pub password_hash: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    /// One of "private", "shared", "public" (enforced by a CHECK).
    pub visibility: String,
    pub owner_id: Uuid,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl NoteRow {
    /// Parse the visibility column into the closed domain enum.
    pub fn visibility(&self) -> StoreResult<Visibility> {
        self.visibility
            .parse()
            .map_err(|_| StoreError::CorruptRow(format!("bad visibility: {}", self.visibility)))
    }
}

/// A note row joined with its owner's email (denormalized for display).
#[derive(Debug, Clone, FromRow)]
pub struct NoteWithOwnerRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub visibility: String,
    pub owner_id: Uuid,
    pub owner_email: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl NoteWithOwnerRow {
    /// Convert into the domain `Note` for access-control evaluation.
    pub fn to_note(&self) -> StoreResult<Note> {
        let visibility: Visibility = self
            .visibility
            .parse()
            .map_err(|_| StoreError::CorruptRow(format!("bad visibility: {}", self.visibility)))?;
        Ok(Note {
            id: NoteId::from_uuid(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            visibility,
            owner: UserId::from_uuid(self.owner_id),
            created: self.created,
            updated: self.updated,
        })
    }
}

/// Database row for the `shared_notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct SharedNoteRow {
    pub note_id: Uuid,
    pub shared_with: Uuid,
    pub created: DateTime<Utc>,
}

/// Input for creating a new user. The password is hashed by the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Normalizes the email to lowercase, matching the storage invariant.
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password_hash,
        }
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub visibility: Visibility,
    pub owner_id: Uuid,
}

impl NewNote {
    pub fn new(
        title: String,
        content: String,
        tags: Option<String>,
        visibility: Visibility,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            tags,
            visibility,
            owner_id,
        }
    }
}

/// Partial update for a note. `None` fields keep their current value;
/// tags can be cleared by sending an empty string.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub visibility: Option<Visibility>,
}

impl NoteUpdate {
    /// Whether the update changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.visibility.is_none()
    }
}

/// Parameters for the note listing query.
///
/// `skip` and `limit` are validated by the API layer before this struct
/// is built (skip >= 0, limit > 0).
#[derive(Debug, Clone)]
pub struct NoteListQuery {
    /// The requester whose visibility the listing is computed for.
    pub requester: Uuid,
    /// Optional status filter; `None` behaves like `All`.
    pub status: Option<StatusFilter>,
    /// Optional case-insensitive substring matched against title and tags.
    pub search: Option<String>,
    /// Rows to skip before the page starts.
    pub skip: i64,
    /// Page size.
    pub limit: i64,
}

impl NoteListQuery {
    /// A query with the default page (skip 0, limit 10) and no filters.
    pub fn for_requester(requester: Uuid) -> Self {
        Self {
            requester,
            status: None,
            search: None,
            skip: 0,
            limit: 10,
        }
    }
}

/// One page of the note listing, with the pre-pagination total.
#[derive(Debug, Clone)]
pub struct NoteListPage {
    /// Total matches before skip/limit was applied.
    pub total: i64,
    /// The requested page, sorted by `updated` descending.
    pub notes: Vec<NoteWithOwnerRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_row(visibility: &str) -> NoteWithOwnerRow {
        NoteWithOwnerRow {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            content: "c".to_string(),
            tags: None,
            visibility: visibility.to_string(),
            owner_id: Uuid::new_v4(),
            owner_email: "owner@example.com".to_string(),
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    #[test]
    fn new_user_lowercases_email() {
        let user = NewUser::new("  Alice@Example.COM ", "hash".to_string());
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn note_row_to_note_parses_visibility() {
        let row = note_row("public");
        let note = row.to_note().unwrap();
        assert_eq!(note.visibility, Visibility::Public);
        assert_eq!(note.id.0, row.id);
        assert_eq!(note.owner.0, row.owner_id);
    }

    #[test]
    fn note_row_rejects_bad_visibility() {
        let row = note_row("hidden");
        assert!(matches!(row.to_note(), Err(StoreError::CorruptRow(_))));
    }

    #[test]
    fn note_update_is_empty() {
        assert!(NoteUpdate::default().is_empty());
        let update = NoteUpdate {
            title: Some("new".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn default_listing_page() {
        let q = NoteListQuery::for_requester(Uuid::new_v4());
        assert_eq!(q.skip, 0);
        assert_eq!(q.limit, 10);
        assert!(q.status.is_none());
    }
}
