//! Note CRUD and listing routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notelet_core::{Note, StatusFilter, UserId, Visibility, access};
use notelet_store::{NewNote, NoteListQuery, NoteUpdate, NoteWithOwnerRow};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Upper bound on note titles, matching the column width.
const MAX_TITLE_LEN: usize = 255;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub visibility: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub visibility: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListNotesParams {
    pub status: Option<String>,
    pub q: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub visibility: String,
    pub owner_id: Uuid,
    pub owner_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NoteResponse {
    fn from_row(row: &NoteWithOwnerRow) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            content: row.content.clone(),
            tags: row.tags.clone(),
            visibility: row.visibility.clone(),
            owner_id: row.owner_id,
            owner_email: Some(row.owner_email.clone()),
            created_at: row.created,
            updated_at: row.updated,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    pub total: i64,
    pub notes: Vec<NoteResponse>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a path segment as a note id; malformed ids are a client error,
/// not a miss.
fn parse_note_id(raw: &str) -> ApiResult<Uuid> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid note ID".to_string()))
}

/// Validate and normalize listing parameters into a store query.
fn build_list_query(requester: Uuid, params: &ListNotesParams) -> ApiResult<NoteListQuery> {
    let status = match params.status.as_deref() {
        None => None,
        Some(raw) => Some(raw.parse::<StatusFilter>().map_err(|_| {
            ApiError::BadRequest(format!(
                "Invalid status filter '{raw}': expected all, private, shared, or public"
            ))
        })?),
    };

    let skip = params.skip.unwrap_or(0);
    if skip < 0 {
        return Err(ApiError::BadRequest(
            "skip must be zero or greater".to_string(),
        ));
    }
    let limit = params.limit.unwrap_or(10);
    if limit <= 0 {
        return Err(ApiError::BadRequest(
            "limit must be greater than zero".to_string(),
        ));
    }

    Ok(NoteListQuery {
        requester,
        status,
        search: params
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string),
        skip,
        limit,
    })
}

fn validate_title(title: &str) -> ApiResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::BadRequest("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::BadRequest(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(title.to_string())
}

fn validate_content(content: &str) -> ApiResult<String> {
    if content.trim().is_empty() {
        return Err(ApiError::BadRequest("Content is required".to_string()));
    }
    Ok(content.to_string())
}

fn parse_visibility(raw: &str) -> ApiResult<Visibility> {
    raw.parse().map_err(|_| {
        ApiError::BadRequest(format!(
            "Invalid visibility '{raw}': expected private, shared, or public"
        ))
    })
}

/// Load a note and check the requester may read it. The existence check
/// comes first, so a real-but-foreign private note is a 403, not a 404.
async fn fetch_readable(
    state: &AppState,
    requester: Uuid,
    note_id: Uuid,
) -> ApiResult<(NoteWithOwnerRow, Note)> {
    let row = state.store().get_note(note_id).await?;
    let note = row.to_note()?;

    let shared = if note.owner == UserId::from_uuid(requester) {
        false
    } else {
        state.store().is_shared_with(note_id, requester).await?
    };

    if !access::can_read(UserId::from_uuid(requester), &note, shared) {
        return Err(ApiError::Forbidden(
            "Not authorized to access this note".to_string(),
        ));
    }
    Ok((row, note))
}

/// Load a note and check the requester owns it. Missing note is a 404;
/// existing note owned by someone else is a 403.
async fn fetch_writable(state: &AppState, requester: Uuid, note_id: Uuid) -> ApiResult<Note> {
    let row = state.store().get_note(note_id).await?;
    let note = row.to_note()?;

    if !access::can_write(UserId::from_uuid(requester), &note) {
        return Err(ApiError::Forbidden(
            "Not authorized to modify this note".to_string(),
        ));
    }
    Ok(note)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - List notes visible to the requester.
///
/// Supports `status` (all|private|shared|public), `q` substring search
/// over title and tags, and `skip`/`limit` pagination. The response
/// carries the pre-pagination total.
async fn list_notes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(params): Query<ListNotesParams>,
) -> ApiResult<Json<ListNotesResponse>> {
    let query = build_list_query(user.user_id, &params)?;
    let page = state.store().list_notes(&query).await?;

    Ok(Json(ListNotesResponse {
        total: page.total,
        notes: page.notes.iter().map(NoteResponse::from_row).collect(),
    }))
}

/// POST /api/notes - Create a note owned by the requester.
async fn create_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let title = validate_title(&request.title)?;
    let content = validate_content(&request.content)?;
    let visibility = match request.visibility.as_deref() {
        Some(raw) => parse_visibility(raw)?,
        None => Visibility::Private,
    };

    let new_note = NewNote::new(title, content, request.tags, visibility, user.user_id);
    let row = state.store().insert_note(&new_note).await?;

    tracing::info!(note_id = %row.id, user_id = %user.user_id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            id: row.id,
            title: row.title,
            content: row.content,
            tags: row.tags,
            visibility: row.visibility,
            owner_id: row.owner_id,
            owner_email: Some(user.email),
            created_at: row.created,
            updated_at: row.updated,
        }),
    ))
}

/// GET /api/notes/{id} - Fetch one note.
///
/// Readable when the requester owns it, it was shared with them, or it
/// is public.
async fn get_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let note_id = parse_note_id(&id)?;
    let (row, _) = fetch_readable(&state, user.user_id, note_id).await?;

    Ok(Json(NoteResponse::from_row(&row)))
}

/// PUT /api/notes/{id} - Update a note. Owner only.
///
/// Fields are optional; omitted fields keep their stored value. Sending
/// `"tags": ""` clears the tags.
async fn update_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let note_id = parse_note_id(&id)?;
    fetch_writable(&state, user.user_id, note_id).await?;

    let update = NoteUpdate {
        title: request.title.as_deref().map(validate_title).transpose()?,
        content: request
            .content
            .as_deref()
            .map(validate_content)
            .transpose()?,
        tags: request.tags,
        visibility: request
            .visibility
            .as_deref()
            .map(parse_visibility)
            .transpose()?,
    };

    state.store().update_note(note_id, &update).await?;
    let row = state.store().get_note(note_id).await?;

    tracing::info!(note_id = %note_id, user_id = %user.user_id, "Note updated");

    Ok(Json(NoteResponse::from_row(&row)))
}

/// DELETE /api/notes/{id} - Delete a note and its share grants. Owner only.
async fn delete_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let note_id = parse_note_id(&id)?;
    fetch_writable(&state, user.user_id, note_id).await?;

    state.store().delete_note(note_id).await?;

    tracing::info!(note_id = %note_id, user_id = %user.user_id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> ListNotesParams {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn test_build_list_query_defaults() {
        let query = build_list_query(Uuid::new_v4(), &params("")).unwrap();
        assert!(query.status.is_none());
        assert!(query.search.is_none());
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_build_list_query_parses_status() {
        let query = build_list_query(Uuid::new_v4(), &params("status=shared")).unwrap();
        assert_eq!(query.status, Some(StatusFilter::Shared));

        let query = build_list_query(Uuid::new_v4(), &params("status=all")).unwrap();
        assert_eq!(query.status, Some(StatusFilter::All));
    }

    #[test]
    fn test_build_list_query_rejects_unknown_status() {
        let err = build_list_query(Uuid::new_v4(), &params("status=everything")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_build_list_query_rejects_bad_pagination() {
        assert!(matches!(
            build_list_query(Uuid::new_v4(), &params("skip=-1")),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            build_list_query(Uuid::new_v4(), &params("limit=0")),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            build_list_query(Uuid::new_v4(), &params("limit=-5")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_build_list_query_drops_blank_search() {
        let query = build_list_query(Uuid::new_v4(), &params("q=+++")).unwrap();
        assert!(query.search.is_none());

        let query = build_list_query(Uuid::new_v4(), &params("q=groceries")).unwrap();
        assert_eq!(query.search.as_deref(), Some("groceries"));
    }

    #[test]
    fn test_parse_note_id_rejects_garbage() {
        assert!(parse_note_id("not-a-uuid").is_err());
        assert!(parse_note_id("").is_err());
        assert!(parse_note_id(&Uuid::new_v4().to_string()).is_ok());
    }

    #[test]
    fn test_validate_title_trims_and_bounds() {
        assert_eq!(validate_title("  Groceries  ").unwrap(), "Groceries");
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(256)).is_err());
        assert!(validate_title(&"x".repeat(255)).is_ok());
    }

    #[test]
    fn test_validate_content_rejects_blank() {
        assert!(validate_content("").is_err());
        assert!(validate_content("  \n ").is_err());
        assert!(validate_content("hello").is_ok());
    }

    #[test]
    fn test_parse_visibility() {
        assert_eq!(parse_visibility("public").unwrap(), Visibility::Public);
        assert!(parse_visibility("everyone").is_err());
    }

    #[test]
    fn test_update_request_all_optional() {
        let request: UpdateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.content.is_none());
        assert!(request.tags.is_none());
        assert!(request.visibility.is_none());
    }

    #[test]
    fn test_note_response_serializes_timestamps() {
        let response = NoteResponse {
            id: Uuid::nil(),
            title: "t".to_string(),
            content: "c".to_string(),
            tags: None,
            visibility: "private".to_string(),
            owner_id: Uuid::nil(),
            owner_email: Some("a@b.com".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("created_at"));
        assert!(json.contains("owner_email"));
    }
}
