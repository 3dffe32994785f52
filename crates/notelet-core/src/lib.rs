//! notelet-core: domain types and access-control rules for notelet.
//!
//! This crate defines the vocabulary shared by the storage and API layers:
//!
//! - Opaque, validated identifiers (`UserId`, `NoteId`)
//! - The closed `Visibility` enum (`private` | `shared` | `public`)
//! - The `StatusFilter` accepted by the listing query
//! - The `Note`, `User`, and `SharedNote` entities
//! - The pure access-control evaluator (`access` module)
//!
//! Everything here is side-effect free; persistence lives in
//! `notelet-store` and HTTP concerns in `notelet-server`.

pub mod access;
pub mod types;

pub use access::{Permissions, can_read, can_write, matches_search, visible_under};
pub use types::{
    Note, NoteId, SharedNote, StatusFilter, StatusFilterParseError, User, UserId, Visibility,
    VisibilityParseError,
};
