use crate::schema::FieldErrors;

/// A specialized [`AuthError`] enum of this crate.
///
/// Field-level validation failures are ordinary values ([`FieldErrors`]),
/// not faults; this enum only wraps them for callers that want a single
/// error channel (e.g. [`crate::Credentials::from_json`]).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The submitted document was not valid JSON.
    #[error("Malformed login payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The record parsed but one or more fields violated the schema.
    #[error("Login rejected: {0}")]
    Rejected(FieldErrors),
}
