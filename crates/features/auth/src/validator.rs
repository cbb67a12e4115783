//! # Login Record Validation
//!
//! Evaluates an untyped submission record against the login schema and
//! reports every violated rule at once.
//!
//! ## Validation Logic
//! Each field is checked independently:
//! 1. **email**: must match a standard email pattern.
//! 2. **password**: length bounds plus four character-class rules.
//! 3. **rememberMe**: must carry a JSON boolean.
//!
//! A field that is missing or carries the wrong JSON type is evaluated as
//! empty text, so every rule an absent value cannot satisfy still reports.

use crate::Credentials;
use crate::schema::{
    EMAIL_RULES, Field, FieldErrors, MSG_REMEMBER_ME_NOT_BOOL, PASSWORD_RULES, Rule,
};
use ehub_domain::constants::{FIELD_EMAIL, FIELD_PASSWORD, FIELD_REMEMBER_ME};
use serde_json::Value;
use tracing::debug;

/// Validates a raw login record against the full schema.
///
/// This is the primary entry point for form validation. Every rule is
/// evaluated regardless of earlier failures so the caller can display all
/// problems in one pass.
///
/// # Arguments
/// * `record` - The untyped key/value record as submitted
///   (`{email, password, rememberMe}`).
///
/// # Returns
/// * `Ok(Credentials)` with the typed record when every rule passes.
/// * `Err(FieldErrors)` mapping each offending field to its messages, in
///   rule-declaration order.
pub fn validate_login(record: &Value) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::default();

    let email = text_field(record, FIELD_EMAIL);
    check_rules(Field::Email, email, EMAIL_RULES, &mut errors);

    let password = text_field(record, FIELD_PASSWORD);
    check_rules(Field::Password, password, PASSWORD_RULES, &mut errors);

    let remember_me = record.get(FIELD_REMEMBER_ME).and_then(Value::as_bool);
    if remember_me.is_none() {
        errors.push(Field::RememberMe, MSG_REMEMBER_ME_NOT_BOOL);
    }

    if errors.is_empty() {
        Ok(Credentials::new(
            email.to_owned(),
            password.to_owned(),
            remember_me.unwrap_or_default(),
        ))
    } else {
        debug!(fields = errors.len(), "Login record rejected");
        Err(errors)
    }
}

/// Reads a field as text; missing or non-string values become empty text.
fn text_field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Walks a rule table in declaration order, recording every violation.
fn check_rules(field: Field, value: &str, rules: &[Rule], errors: &mut FieldErrors) {
    for rule in rules {
        if !(rule.check)(value) {
            errors.push(field, rule.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        MSG_PASSWORD_NO_DIGIT, MSG_PASSWORD_NO_SPECIAL, MSG_PASSWORD_NO_UPPERCASE,
        MSG_PASSWORD_TOO_SHORT,
    };
    use serde_json::json;

    #[test]
    fn password_messages_follow_rule_declaration_order() {
        let record = json!({ "email": "a@b.com", "password": "chuan", "rememberMe": true });

        let errors = validate_login(&record).unwrap_err();
        let messages = errors.messages(Field::Password);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], MSG_PASSWORD_TOO_SHORT);
        assert_eq!(messages[1], MSG_PASSWORD_NO_UPPERCASE);
        assert_eq!(messages[2], MSG_PASSWORD_NO_DIGIT);
        assert_eq!(messages[3], MSG_PASSWORD_NO_SPECIAL);
    }

    #[test]
    fn missing_password_is_treated_as_empty_text() {
        let record = json!({ "email": "a@b.com", "rememberMe": false });

        let errors = validate_login(&record).unwrap_err();
        // All rules except the max-length bound fail on empty text.
        assert_eq!(errors.messages(Field::Password).len(), 5);
    }

    #[test]
    fn non_boolean_remember_me_reports_type_error() {
        let record = json!({ "email": "a@b.com", "password": "Abcde1!", "rememberMe": "yes" });

        let errors = validate_login(&record).unwrap_err();
        assert_eq!(errors.messages(Field::RememberMe), [MSG_REMEMBER_ME_NOT_BOOL]);
    }
}
