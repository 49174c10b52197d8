//! ObjectId parsing for path parameters.

use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::error::AppError;

/// Parses a 24-character hex id from a path segment.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the segment is not a valid
/// ObjectId, so malformed ids surface as 400 rather than a store error.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::bad_request("Invalid id", json!({ "id": raw })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_object_id("not-an-id").is_err());
        assert!(parse_object_id("").is_err());
        // Right length, bad alphabet.
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}
