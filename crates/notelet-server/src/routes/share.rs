//! Sharing route: grant another user read access to a note.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notelet_core::{UserId, access};
use notelet_store::StoreError;

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShareNoteRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct ShareNoteResponse {
    pub message: String,
    pub shared_with: SharedUser,
}

#[derive(Debug, Serialize)]
pub struct SharedUser {
    pub id: Uuid,
    pub email: String,
}

/// POST /api/notes/{id}/share - Share a note with another user.
///
/// Check order matters for the status codes: missing note is 404,
/// non-owner is 403, missing target user is 404, self-share is 400,
/// and an existing grant is 409.
async fn share_note(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<ShareNoteRequest>,
) -> ApiResult<(StatusCode, Json<ShareNoteResponse>)> {
    let note_id: Uuid = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid note ID".to_string()))?;
    let target_id: Uuid = request
        .user_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid user ID".to_string()))?;

    let row = state.store().get_note(note_id).await?;
    let note = row.to_note()?;

    if !access::can_write(UserId::from_uuid(user.user_id), &note) {
        return Err(ApiError::Forbidden(
            "Only the owner can share a note".to_string(),
        ));
    }

    let target = state
        .store()
        .get_user_by_id(target_id)
        .await
        .map_err(|err| match err {
            StoreError::UserNotFound(_) => ApiError::NotFound("User not found".to_string()),
            other => ApiError::from(other),
        })?;

    if target.id == user.user_id {
        return Err(ApiError::BadRequest(
            "Cannot share a note with yourself".to_string(),
        ));
    }

    state.store().insert_share(note_id, target.id).await?;

    tracing::info!(
        note_id = %note_id,
        owner_id = %user.user_id,
        target_id = %target.id,
        "Note shared"
    );

    Ok((
        StatusCode::CREATED,
        Json(ShareNoteResponse {
            message: format!("Note shared with user {}", target.email),
            shared_with: SharedUser {
                id: target.id,
                email: target.email,
            },
        }),
    ))
}

/// Build sharing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/notes/{id}/share", post(share_note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use http::StatusCode;

    #[test]
    fn test_share_request_deserialize() {
        let json = r#"{"user_id": "550e8400-e29b-41d4-a716-446655440000"}"#;
        let request: ShareNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_share_response_message_names_target() {
        let response = ShareNoteResponse {
            message: "Note shared with user bob@example.com".to_string(),
            shared_with: SharedUser {
                id: Uuid::nil(),
                email: "bob@example.com".to_string(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("bob@example.com"));
    }

    #[test]
    fn test_duplicate_share_maps_to_conflict() {
        let err = ApiError::from(StoreError::DuplicateShare {
            note_id: Uuid::nil(),
            user_id: Uuid::nil(),
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
