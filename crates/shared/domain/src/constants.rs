//! Canonical entity/module name strings used across slices.

pub const AUTH: &str = "auth";
pub const CHAT: &str = "chat";
pub const EXAMS: &str = "exams";
pub const STUDY_ROOM: &str = "study-room";

/// Login form field names as they appear in the submitted record.
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_REMEMBER_ME: &str = "rememberMe";
