//! Commonly used kernel exports in one import.

pub use crate::config::{ConfigError, load_config};
pub use crate::safe_nanoid;
pub use ehub_domain::config::AppConfig;
