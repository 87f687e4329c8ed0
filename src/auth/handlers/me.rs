/**
 * Get Current User Handler
 *
 * Authenticated echo of the session's user, for GET /me. The `CurrentUser`
 * extractor rejects requests without a valid session cookie with 401.
 */

use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::middleware::auth::CurrentUser;

/// Current user handler
pub async fn me(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        username: user.username,
    })
}
