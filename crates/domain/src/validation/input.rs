//! Primitive argument checks shared by every public operation.

use crate::error::DomainError;

/// Validate a caller-supplied string argument is non-empty after trimming.
///
/// Shape and nullability checks are discharged by the type system; what
/// survives in a typed API is the blank-string case.
pub fn require_non_blank(value: &str, name: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        let actual = if value.is_empty() {
            "empty string"
        } else {
            "blank string"
        };
        return Err(DomainError::invalid_input(name, "non-empty string", actual));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_non_blank() {
        assert!(require_non_blank("find-the-key", "template id").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        let empty = require_non_blank("", "template id").expect_err("empty rejected");
        assert_eq!(empty.code(), "INVALID_INPUT");
        assert!(empty.to_string().contains("empty string"));

        let blank = require_non_blank("   \t", "template id").expect_err("blank rejected");
        assert!(blank.to_string().contains("blank string"));
    }

    #[test]
    fn test_error_names_the_parameter() {
        let err = require_non_blank("", "instance id").expect_err("rejected");
        assert!(err.to_string().contains("instance id"));
    }
}
