use crate::core::domain::model::domain_record::DomainRecord;
use std::backtrace::Backtrace;
use thiserror::Error;

// Alias keeps thiserror from treating the field as a nightly-only `provide` backtrace;
// it is the same `std::backtrace::Backtrace` type.
type CapturedBacktrace = Backtrace;

/// The main error type for CDNetworks domain operations.
///
/// This enum represents all possible errors that can occur while
/// talking to the CDNetworks API or validating a domain record.
#[derive(Error, Debug)]
pub enum CdnError {
    /// Represents transport failures and unreadable responses
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents a non-success answer from the API
    ///
    /// # Fields
    /// * `status` - HTTP status code
    /// * `code` - API error code, when the body carried one
    /// * `message` - API error message or raw body
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The requested domain does not exist on the remote side
    #[error("Domain not found: {0}")]
    NotFound(String),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    /// * `backtrace` - Stack trace where the error occurred
    #[error("Validation error: {source}")]
    Validation {
        source: ValidationError,
        backtrace: CapturedBacktrace,
    },

    /// The domain exists remotely but a step after the create call failed
    ///
    /// # Fields
    /// * `domain_id` - Id assigned by the API
    /// * `state` - The plan with `domain_id` set; computed attributes stay unknown
    /// * `source` - The failure that stopped the create
    #[error("Domain {domain_id} was created but not completed: {source}")]
    PartiallyCreated {
        domain_id: String,
        state: Box<DomainRecord>,
        source: Box<CdnError>,
    },
}

impl CdnError {
    /// Returns the record to keep as state when the domain was created
    /// remotely before the error occurred.
    pub fn partial_state(&self) -> Option<&DomainRecord> {
        match self {
            CdnError::PartiallyCreated { state, .. } => Some(&**state),
            _ => None,
        }
    }
}

impl From<ValidationError> for CdnError {
    fn from(error: ValidationError) -> Self {
        CdnError::Validation {
            source: error,
            backtrace: Backtrace::capture(),
        }
    }
}

/// Specialized error type for validation failures.
///
/// Raised locally, before any request leaves the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),

    /// More origin addresses than the platform accepts
    #[error("The number of IPs cannot exceed {max} (got {count})")]
    TooManyOriginIps { count: usize, max: usize },
}

impl ValidationError {
    pub(crate) fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Type alias for Results that may fail with a CdnError
pub type CdnResult<T> = Result<T, CdnError>;
