//! Token issuance, verification, and the self-access authorization policy.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::AppError;

/// Claims carried by an issued token.
///
/// `email` is the identity the authorization policy compares against; any
/// additional fields a caller supplies at issue time round-trip unchanged
/// through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Service for issuing and verifying signed, time-limited tokens.
///
/// Tokens are HS256 JWTs signed with a shared secret. The lifecycle has
/// exactly two states: valid (signature checks out, not expired) and
/// invalid/absent. No refresh, no revocation.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates a new service from the shared signing secret.
    ///
    /// `token_ttl_seconds` bounds token validity; the default configuration
    /// uses one day.
    pub fn new(secret: &str, token_ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl: Duration::seconds(token_ttl_seconds),
        }
    }

    /// Signs a token for the claimed identity.
    ///
    /// The caller's identity is not verified — any caller can mint a token
    /// for any email. That trust gap is inherited from the system contract,
    /// not something this layer can close.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, email: String, extra: Map<String, Value>) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            email,
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
            extra,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            AppError::internal("Token signing failed", json!({}))
        })
    }

    /// Verifies signature and expiry, returning the decoded claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, signed
    /// with a different secret, or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token verification failed");
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "invalid or expired token" }),
                )
            })
    }

    /// Authorization policy: the authenticated identity may only access its
    /// own resources.
    ///
    /// Every protected route performs this comparison here rather than
    /// inline, so adding a protected route cannot silently omit it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the requested identity differs
    /// from the token's email claim (case-sensitive).
    pub fn authorize_self(&self, claims: &Claims, requested_email: &str) -> Result<(), AppError> {
        if claims.email != requested_email {
            return Err(AppError::forbidden(
                "Forbidden",
                json!({ "reason": "email does not match token identity" }),
            ));
        }

        Ok(())
    }
}
