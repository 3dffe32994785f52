//! Core data types for the notelet service.
//!
//! Identifiers are opaque UUID wrappers: a string must parse as a
//! well-formed UUID before any lookup happens, so a malformed identifier
//! is a validation failure rather than a missing entity.
//!
//! All entity types derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize` for inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a user.
///
/// Wraps a UUID v4, providing type safety to distinguish user ids from
/// note ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Visibility
// ============================================================================

/// Visibility tier of a note.
///
/// Governs default readability independent of explicit sharing relations:
/// a `private` note may still carry share rows (those users can read it),
/// and a `shared`-tagged note with no share rows is readable by nobody but
/// its owner. The tag and the relation are deliberately decoupled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Readable by the owner and explicitly shared-with users only.
    Private,
    /// Intended for sharing; surfaced under the `shared` listing filter.
    Shared,
    /// Readable by any authenticated user.
    Public,
}

impl Visibility {
    /// The database/wire representation of this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Shared => "shared",
            Self::Public => "public",
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Private
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = VisibilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Self::Private),
            "shared" => Ok(Self::Shared),
            "public" => Ok(Self::Public),
            other => Err(VisibilityParseError(other.to_string())),
        }
    }
}

/// Error type for parsing Visibility from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityParseError(pub String);

impl fmt::Display for VisibilityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid visibility {:?}: expected private, shared, or public",
            self.0
        )
    }
}

impl std::error::Error for VisibilityParseError {}

// ============================================================================
// Status Filter
// ============================================================================

/// Status filter accepted by the listing query.
///
/// `All` behaves like an absent filter. `Shared` restricts to notes that
/// are both explicitly shared with the requester and tagged `shared`;
/// `Private` and `Public` restrict to the requester's own notes with the
/// matching tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Private,
    Shared,
    Public,
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Private => "private",
            Self::Shared => "shared",
            Self::Public => "public",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = StatusFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "private" => Ok(Self::Private),
            "shared" => Ok(Self::Shared),
            "public" => Ok(Self::Public),
            other => Err(StatusFilterParseError(other.to_string())),
        }
    }
}

/// Error type for parsing StatusFilter from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilterParseError(pub String);

impl fmt::Display for StatusFilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid status filter {:?}: expected all, private, shared, or public",
            self.0
        )
    }
}

impl std::error::Error for StatusFilterParseError {}

// ============================================================================
// Core Domain Types
// ============================================================================

/// An identity record. The password hash is held by the storage layer and
/// never appears here; read paths only ever see id and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user.
    pub id: UserId,

    /// Unique email, stored lowercase.
    pub email: String,
}

/// The primary content entity.
///
/// A note always has exactly one owner. The owner holds exclusive
/// write/delete/share rights; visibility and share relations only ever
/// widen read access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note.
    pub id: NoteId,

    /// Title, 1-255 characters.
    pub title: String,

    /// Body text, non-empty.
    pub content: String,

    /// Optional comma-separated label list.
    pub tags: Option<String>,

    /// Visibility tier.
    pub visibility: Visibility,

    /// The user who owns this note.
    pub owner: UserId,

    /// When the note was created.
    pub created: DateTime<Utc>,

    /// Refreshed on every mutation; drives the listing sort order.
    pub updated: DateTime<Utc>,
}

impl Note {
    /// Creates a new note owned by `owner` with fresh timestamps.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Option<String>,
        visibility: Visibility,
        owner: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            tags,
            visibility,
            owner,
            created: now,
            updated: now,
        }
    }
}

/// An explicit grant of read access from a note's owner to another user.
///
/// The (note, shared_with) pair is unique; the relation is created by the
/// sharing registrar, never updated, and cascade-deleted with the note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedNote {
    /// The note being shared.
    pub note: NoteId,

    /// The user the note is shared with.
    pub shared_with: UserId,

    /// When the share was granted.
    pub created: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_display_fromstr() {
        let id = UserId::new();
        let s = id.to_string();
        let parsed: UserId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_roundtrip() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_rejects_malformed() {
        let result: Result<NoteId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn visibility_serde_lowercase() {
        let json = serde_json::to_string(&Visibility::Private).unwrap();
        assert_eq!(json, "\"private\"");
        let parsed: Visibility = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(parsed, Visibility::Public);
    }

    #[test]
    fn visibility_fromstr() {
        assert_eq!("private".parse::<Visibility>().unwrap(), Visibility::Private);
        assert_eq!("shared".parse::<Visibility>().unwrap(), Visibility::Shared);
        assert_eq!("public".parse::<Visibility>().unwrap(), Visibility::Public);
    }

    #[test]
    fn visibility_rejects_unknown() {
        let result = "hidden".parse::<Visibility>();
        assert!(matches!(result, Err(VisibilityParseError(ref s)) if s == "hidden"));
    }

    #[test]
    fn visibility_default_is_private() {
        assert_eq!(Visibility::default(), Visibility::Private);
    }

    #[test]
    fn visibility_as_str_roundtrip() {
        for v in [Visibility::Private, Visibility::Shared, Visibility::Public] {
            assert_eq!(v.as_str().parse::<Visibility>().unwrap(), v);
        }
    }

    #[test]
    fn status_filter_fromstr() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "shared".parse::<StatusFilter>().unwrap(),
            StatusFilter::Shared
        );
        assert!("everything".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn note_roundtrip() {
        let owner = UserId::new();
        let note = Note::new(
            "Grocery List",
            "milk, eggs",
            Some("home,errand".to_string()),
            Visibility::Private,
            owner,
        );
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, parsed);
    }

    #[test]
    fn note_new_sets_matching_timestamps() {
        let note = Note::new("t", "c", None, Visibility::default(), UserId::new());
        assert_eq!(note.created, note.updated);
    }

    #[test]
    fn shared_note_roundtrip() {
        let share = SharedNote {
            note: NoteId::new(),
            shared_with: UserId::new(),
            created: Utc::now(),
        };
        let json = serde_json::to_string(&share).unwrap();
        let parsed: SharedNote = serde_json::from_str(&json).unwrap();
        assert_eq!(share, parsed);
    }
}
