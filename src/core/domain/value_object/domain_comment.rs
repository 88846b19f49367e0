use crate::core::domain::error::ValidationError;

/// Maximum length of a domain comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// A validated free-text remark on a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainComment(String);

impl DomainComment {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_comment(&value)?;
        Ok(Self(value))
    }

    /// Creates a new comment without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a comment. Length is counted in characters, not bytes.
pub(crate) fn validate_comment(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_COMMENT_LENGTH {
        return Err(ValidationError::field(
            "comment",
            format!("Comment cannot exceed {} characters", MAX_COMMENT_LENGTH),
        ));
    }
    Ok(())
}
