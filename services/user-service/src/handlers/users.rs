use axum::Json;

use crate::models::UsersResponse;

/// GET /users
pub async fn list_users() -> Json<UsersResponse> {
    Json(UsersResponse::current())
}
