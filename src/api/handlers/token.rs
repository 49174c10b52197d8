//! Handler for token issuance.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::api::dto::token::{TokenRequest, TokenResponse};
use crate::api::middleware::auth::TOKEN_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Signs the submitted claims and sets the token cookie.
///
/// # Endpoint
///
/// `POST /jwt`
///
/// # Request Body
///
/// ```json
/// { "email": "dev@mail.test", "role": "applicant" }
/// ```
///
/// Extra fields are signed into the token unchanged. The cookie is
/// HTTP-only with path `/`; the `Secure` flag follows `COOKIE_SECURE`.
///
/// # Errors
///
/// Returns 500 if signing fails.
pub async fn issue_token_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<TokenRequest>,
) -> Result<(CookieJar, Json<TokenResponse>), AppError> {
    let token = state.auth_service.issue(payload.email, payload.extra)?;

    let cookie = Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .build();

    Ok((jar.add(cookie), Json(TokenResponse { success: true })))
}
