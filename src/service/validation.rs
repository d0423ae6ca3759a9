//! Argument checks that run before any store access.

use crate::error::AppError;
use uuid::Uuid;

/// Validate a client-supplied id and return its canonical (lowercase, hyphenated) form.
/// Ids are always server-generated UUIDs, so anything else cannot match a row.
pub fn parse_profile_id(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("id must not be empty".into()));
    }
    let id = Uuid::parse_str(trimmed)
        .map_err(|_| AppError::InvalidInput(format!("id '{}' is not a valid UUID", raw)))?;
    Ok(id.hyphenated().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_valid_ids() {
        let id = parse_profile_id(" 7A0C3A4E-43F4-4B8E-9D4C-2F1B6F0F9A11 ").unwrap();
        assert_eq!(id, "7a0c3a4e-43f4-4b8e-9d4c-2f1b6f0f9a11");
    }

    #[test]
    fn rejects_blank_and_malformed_ids() {
        assert!(matches!(parse_profile_id(""), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_profile_id("   "), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_profile_id("not-a-uuid"), Err(AppError::InvalidInput(_))));
    }
}
