//! # Login Form Validation
//!
//! This crate decides whether a submitted login record is well-formed and,
//! if not, reports which fields are wrong and why. It is the only gate
//! between raw user input and the typed [`Credentials`] handed to the
//! authentication backend.
//!
//! ## Architecture
//!
//! 1.  **Schema ([`schema`]):** the field list and the per-field rule tables,
//!     declared as explicit `(predicate, message)` pairs.
//! 2.  **Validation ([`validator`]):** evaluates every rule against an
//!     untyped record and collects violations into a [`FieldErrors`] map.
//!
//! All rules are evaluated on every call, nothing short-circuits, so a
//! caller can surface every problem to the user at once. Validation is a
//! pure function: no I/O, no retries, no side effects.
//!
//! Messages are reported in the application's Vietnamese locale.

mod error;
pub mod schema;
pub mod validator;

pub use crate::error::AuthError;
pub use crate::schema::{Field, FieldErrors};
use serde::Serialize;
use std::fmt;
use zeroize::Zeroize;

/// The validated login record.
///
/// Constructed exclusively by [`validator::validate_login`]; holding one is
/// proof that every schema rule passed. The record is not persisted here;
/// downstream authentication is an external collaborator.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// The submitted email address.
    pub email: String,
    // The password never leaves this type through Serialize or Debug.
    #[serde(skip_serializing)]
    password: String,
    /// Whether the session should outlive the browser tab.
    pub remember_me: bool,
}

impl Credentials {
    pub(crate) fn new(email: String, password: String, remember_me: bool) -> Self {
        Self { email, password, remember_me }
    }

    /// The submitted password.
    ///
    /// Use this sparingly and only when handing the record to the
    /// authentication backend.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Parses a raw JSON document and validates it against the login schema.
    ///
    /// # Errors
    /// * [`AuthError::Malformed`] if the document is not valid JSON.
    /// * [`AuthError::Rejected`] carrying the field error map if any rule fails.
    pub fn from_json(raw: &str) -> Result<Self, AuthError> {
        let record = serde_json::from_str(raw)?;
        validator::validate_login(&record).map_err(AuthError::Rejected)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never reveal the password content.
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &format_args!("*** {} bytes ***", self.password.len()))
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
