/// User CRUD API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use vision_core::{User, UserId, UserInput, VisionError};

const INVALID_USER_ID: &str = "Invalid user ID";
const NULL_USER: &str = "User object is null";

type UserPath = std::result::Result<Path<UserId>, PathRejection>;

/// GET /api/user
/// List every user
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    const API: &str = "list_users";
    tracing::info!(api = API, "Request received");

    let users = app_state
        .users
        .list_users()
        .await
        .map_err(|e| failure(API, None, e))?;

    tracing::info!(api = API, count = users.len(), "Success");
    Ok(Json(users))
}

/// GET /api/user/:id
/// Get a single user
pub async fn get_user(
    id: UserPath,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    const API: &str = "get_user";
    let id = user_id(API, id)?;

    let user = app_state
        .users
        .get_user(id)
        .await
        .map_err(|e| failure(API, Some(id), e))?
        .ok_or_else(|| not_found(API, id))?;

    tracing::info!(
        api = API,
        id = user.id,
        user_name = user.name.as_deref().unwrap_or_default(),
        "Success"
    );
    Ok(Json(user))
}

/// POST /api/user
/// Create a user; responds 201 with a `Location` pointing at the new record
pub async fn create_user(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    const API: &str = "create_user";
    tracing::info!(api = API, body_len = body.len(), "Request received");

    let input = user_payload(API, None, &body)?;

    let user = app_state
        .users
        .create_user(Some(input))
        .await
        .map_err(|e| failure(API, None, e))?;

    tracing::info!(
        api = API,
        id = user.id,
        user_name = user.name.as_deref().unwrap_or_default(),
        "Success"
    );

    let location = format!("/api/user/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// PUT /api/user/:id
/// Replace name, email and active flag of a user
pub async fn update_user(
    id: UserPath,
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode> {
    const API: &str = "update_user";
    let id = user_id(API, id)?;
    let input = user_payload(API, Some(id), &body)?;

    let updated = app_state
        .users
        .update_user(id, Some(input))
        .await
        .map_err(|e| failure(API, Some(id), e))?;

    if !updated {
        return Err(not_found(API, id));
    }

    tracing::info!(api = API, id, "Success | Updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/user/:id
/// Remove a user
pub async fn delete_user(
    id: UserPath,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    const API: &str = "delete_user";
    let id = user_id(API, id)?;

    let deleted = app_state
        .users
        .delete_user(id)
        .await
        .map_err(|e| failure(API, Some(id), e))?;

    if !deleted {
        return Err(not_found(API, id));
    }

    tracing::info!(api = API, id, "Success | Deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Log the request and check the id is a positive integer
fn user_id(api: &'static str, id: UserPath) -> Result<UserId> {
    match id {
        Ok(Path(id)) => {
            tracing::info!(api, id, "Request received");
            if id <= 0 {
                tracing::warn!(api, id, "Invalid user ID");
                return Err(ServerError::BadRequest(INVALID_USER_ID.to_string()));
            }
            Ok(id)
        }
        Err(rejection) => {
            tracing::info!(api, "Request received");
            tracing::warn!(api, %rejection, "Invalid user ID");
            Err(ServerError::BadRequest(INVALID_USER_ID.to_string()))
        }
    }
}

/// Parse and validate a create/update body
///
/// An empty body or a JSON `null` counts as a missing payload.
fn user_payload(api: &'static str, id: Option<UserId>, body: &Bytes) -> Result<UserInput> {
    let payload: Option<UserInput> = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice(body).map_err(|e| {
            tracing::warn!(api, ?id, error = %e, "Malformed user payload");
            ServerError::BadRequest(e.to_string())
        })?
    };

    let Some(input) = payload else {
        tracing::warn!(api, ?id, "User object is null");
        return Err(ServerError::BadRequest(NULL_USER.to_string()));
    };

    let errors = input.validate();
    if !errors.is_empty() {
        tracing::warn!(api, ?id, count = errors.len(), "Invalid model state");
        return Err(ServerError::Validation(errors));
    }

    Ok(input)
}

fn not_found(api: &'static str, id: UserId) -> ServerError {
    tracing::info!(api, id, "User not found");
    VisionError::NotFound(id).into()
}

/// Log a service error at the right level and convert it for the response
fn failure(api: &'static str, id: Option<UserId>, err: VisionError) -> ServerError {
    match &err {
        VisionError::Validation { field, .. } => {
            tracing::warn!(api, ?id, field = %field, error = %err, "Validation failed");
        }
        _ => tracing::error!(api, ?id, error = %err, "Failure"),
    }
    err.into()
}
