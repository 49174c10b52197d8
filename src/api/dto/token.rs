//! DTOs for the token issue endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims payload submitted to `POST /jwt`.
///
/// `email` is the one claim the backend reads; everything else is signed
/// into the token unchanged.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response confirming the token cookie was set.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
}
