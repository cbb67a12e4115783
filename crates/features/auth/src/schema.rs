//! The login schema: fields, rule tables, and the field error map.
//!
//! Every rule is an explicit `(predicate, message)` pair. The validator
//! walks the tables in declaration order and never stops at the first
//! violation, so the reported messages always follow the order below.

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;
use strum_macros::{AsRefStr, Display, EnumString};

/// Inclusive password length bounds, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const PASSWORD_MAX_CHARS: usize = 100;

/// The fixed special-character set a password must draw from.
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&', '#'];

pub const MSG_EMAIL_INVALID: &str = "Email phải là một địa chỉ email hợp lệ.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password phải có ít nhất 6 ký tự.";
pub const MSG_PASSWORD_TOO_LONG: &str = "Password không được vượt quá 100 ký tự.";
pub const MSG_PASSWORD_NO_UPPERCASE: &str = "Password phải chứa ít nhất một chữ cái viết hoa.";
pub const MSG_PASSWORD_NO_LOWERCASE: &str = "Password phải chứa ít nhất một chữ cái viết thường.";
pub const MSG_PASSWORD_NO_DIGIT: &str = "Password phải chứa ít nhất một chữ số.";
pub const MSG_PASSWORD_NO_SPECIAL: &str = "Password phải chứa ít nhất một ký tự đặc biệt.";
pub const MSG_REMEMBER_ME_NOT_BOOL: &str = "Giá trị của rememberMe phải là boolean.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// A login form field, named as it appears in the submitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
pub enum Field {
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "password")]
    Password,
    #[strum(serialize = "rememberMe")]
    RememberMe,
}

/// One independent validation rule: a predicate over the raw field text and
/// the message reported when the predicate fails.
pub(crate) struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

pub(crate) const EMAIL_RULES: &[Rule] =
    &[Rule { check: is_email, message: MSG_EMAIL_INVALID }];

pub(crate) const PASSWORD_RULES: &[Rule] = &[
    Rule { check: is_long_enough, message: MSG_PASSWORD_TOO_SHORT },
    Rule { check: is_short_enough, message: MSG_PASSWORD_TOO_LONG },
    Rule { check: has_uppercase, message: MSG_PASSWORD_NO_UPPERCASE },
    Rule { check: has_lowercase, message: MSG_PASSWORD_NO_LOWERCASE },
    Rule { check: has_digit, message: MSG_PASSWORD_NO_DIGIT },
    Rule { check: has_special, message: MSG_PASSWORD_NO_SPECIAL },
];

fn is_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

fn is_long_enough(s: &str) -> bool {
    s.chars().count() >= PASSWORD_MIN_CHARS
}

fn is_short_enough(s: &str) -> bool {
    s.chars().count() <= PASSWORD_MAX_CHARS
}

fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

fn has_special(s: &str) -> bool {
    s.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(&c))
}

/// An ordered mapping from field to the validation messages that apply to it.
///
/// Fields appear in schema-declaration order (email, password, rememberMe)
/// and messages in rule-declaration order. Serializes to a JSON object of
/// `field -> [messages]` for direct display in the form UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, Vec<Cow<'static, str>>)>,
}

impl FieldErrors {
    /// Appends a message for `field`, keeping one entry per field.
    pub fn push(&mut self, field: Field, message: impl Into<Cow<'static, str>>) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.entries.push((field, vec![message.into()])),
        }
    }

    /// True when no field has any violation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one violation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The messages recorded for `field`, in rule-declaration order.
    #[must_use]
    pub fn messages(&self, field: Field) -> &[Cow<'static, str>] {
        self.entries.iter().find(|(f, _)| *f == field).map_or(&[], |(_, messages)| messages.as_slice())
    }

    /// Iterates over `(field, messages)` entries in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[Cow<'static, str>])> {
        self.entries.iter().map(|(field, messages)| (*field, messages.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.entries {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field.as_ref(), messages)?;
        }
        map.end()
    }
}
