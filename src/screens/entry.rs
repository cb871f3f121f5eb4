//! Nickname entry step of the quiz flow. Only local validation
//! happens here, the quiz itself and the navigation between screens
//! belong to the surrounding app.

use thiserror::Error;

/// Error type for rejected nicknames
#[derive(Debug, PartialEq, Eq, Error)]
pub enum NicknameError {
    /// The nickname was empty or whitespace only
    #[error("Nickname cannot be empty")]
    Empty,
    /// The nickname is on the reserved list
    #[error("Nickname is not available")]
    Reserved,
}

// TODO: Check nickname uniqueness against the backend once the users
// endpoint exposes a lookup for it
/// Validates a nickname before the quiz starts, returning the
/// trimmed nickname on success.
///
/// `value`    The raw input value
/// `reserved` Nicknames that may not be used
pub fn validate_nickname<'a>(
    value: &'a str,
    reserved: &[String],
) -> Result<&'a str, NicknameError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(NicknameError::Empty);
    }

    if reserved.iter().any(|name| name == value) {
        return Err(NicknameError::Reserved);
    }

    Ok(value)
}

#[cfg(test)]
mod test {
    use super::{validate_nickname, NicknameError};

    /// Tests empty and whitespace only nicknames are rejected
    #[test]
    fn test_empty_nickname() {
        assert_eq!(validate_nickname("", &[]), Err(NicknameError::Empty));
        assert_eq!(validate_nickname("   ", &[]), Err(NicknameError::Empty));
    }

    /// Tests reserved nicknames are rejected
    #[test]
    fn test_reserved_nickname() {
        let reserved = vec!["admin".to_string()];
        assert_eq!(
            validate_nickname("admin", &reserved),
            Err(NicknameError::Reserved)
        );
        assert_eq!(validate_nickname("player", &reserved), Ok("player"));
    }

    /// Tests accepted nicknames are trimmed
    #[test]
    fn test_trimmed_nickname() {
        assert_eq!(validate_nickname("  player one ", &[]), Ok("player one"));
    }
}
