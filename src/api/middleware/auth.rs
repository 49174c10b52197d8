//! Cookie-based JWT authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Name of the cookie carrying the signed token.
pub const TOKEN_COOKIE: &str = "token";

/// Authenticates requests using the JWT carried in the `token` cookie.
///
/// # Authentication Flow
///
/// 1. Read the `token` cookie
/// 2. Verify signature and expiry against the shared secret
/// 3. Attach the decoded [`crate::application::services::Claims`] as a
///    request extension for downstream handlers
/// 4. Continue to next middleware/handler
///
/// Authorization (does this identity own the requested resource) is a
/// separate step handled by
/// [`crate::application::services::AuthService::authorize_self`].
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - The cookie is missing
/// - The token is malformed, expired, or signed with a different secret
pub async fn layer(
    State(st): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "missing token cookie" }),
            )
        })?;

    let claims = st.auth_service.verify(&token)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
