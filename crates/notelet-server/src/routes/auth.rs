//! Authentication routes: register, login, me, and user lookup by email.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notelet_store::NewUser;

use crate::auth::{self, AuthenticatedUser};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
}

/// Public view of a user: id and email only, never the hash.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct FindUsersQuery {
    pub email: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Minimal shape check for an email address: something@something.tld.
fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.split_once('.').is_some_and(|(host, tld)| {
                    !host.is_empty() && !tld.is_empty()
                })
        }
        None => false,
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/auth/register - Create a new account.
///
/// # Response
///
/// - 201 Created: `{ "message": "...", "user": { "id", "email" } }`
/// - 400 Bad Request: Malformed email or short password
/// - 409 Conflict: Email already registered
async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let email = request.email.trim().to_lowercase();

    if !valid_email(&email) {
        return Err(ApiError::BadRequest(
            "Email must be a valid email address".to_string(),
        ));
    }
    if request.password.len() < 6 {
        return Err(ApiError::BadRequest(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let user = state
        .store()
        .insert_user(&NewUser::new(&email, password_hash))
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: UserSummary {
                id: user.id,
                email: user.email,
            },
        }),
    ))
}

/// POST /api/auth/login - Exchange credentials for a Bearer token.
///
/// A missing account and a wrong password produce the same 401, so the
/// login path does not reveal which emails are registered.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let invalid = || ApiError::Unauthorized("Invalid email or password".to_string());

    let user = state
        .store()
        .get_user_by_email(&request.email)
        .await?
        .ok_or_else(invalid)?;

    if !auth::verify_password(&request.password, &user.password_hash)? {
        return Err(invalid());
    }

    let config = state.config();
    let token = auth::create_token(user.id, &user.email, &config.jwt_secret, config.jwt_expiry_hours)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

/// GET /api/auth/me - Current user info.
async fn me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<UserSummary>> {
    let row = state.store().get_user_by_id(user.user_id).await?;

    Ok(Json(UserSummary {
        id: row.id,
        email: row.email,
    }))
}

/// GET /api/auth/users?email= - Exact-match user lookup for the sharing
/// flow. Returns an empty list when no user matches.
async fn find_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<FindUsersQuery>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let email = query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email query parameter is required".to_string()))?;

    let users = state
        .store()
        .get_user_by_email(email)
        .await?
        .into_iter()
        .map(|row| UserSummary {
            id: row.id,
            email: row.email,
        })
        .collect();

    Ok(Json(users))
}

/// Build auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/users", get(find_users))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_accepts_plain_addresses() {
        assert!(valid_email("alice@example.com"));
        assert!(valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn test_valid_email_rejects_malformed() {
        assert!(!valid_email("alice"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("alice@com"));
        assert!(!valid_email("alice@.com"));
        assert!(!valid_email("alice@example."));
    }

    #[test]
    fn test_register_request_deserialize() {
        let json = r#"{"email": "a@b.com", "password": "secret"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_login_response_serialize() {
        let response = LoginResponse {
            message: "Logged in successfully".to_string(),
            access_token: "jwt.token.here".to_string(),
            token_type: "bearer".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("access_token"));
        assert!(json.contains("bearer"));
    }

    #[test]
    fn test_user_summary_has_no_password_field() {
        let summary = UserSummary {
            id: Uuid::nil(),
            email: "a@b.com".to_string(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_find_users_query_deserialize() {
        let query: FindUsersQuery = serde_urlencoded::from_str("email=a%40b.com").unwrap();
        assert_eq!(query.email.as_deref(), Some("a@b.com"));
        let empty: FindUsersQuery = serde_urlencoded::from_str("").unwrap();
        assert!(empty.email.is_none());
    }
}
