use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration shared across slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub room: RoomConfig,
    pub chat: ChatConfig,
    pub exams: ExamsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Study-room configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Display title shown next to the wall clock.
    pub title: String,
}

/// Chat transcript configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Upper bound on retained messages; the oldest entry is dropped past it.
    pub capacity: usize,
    /// Load the built-in demo transcript on startup.
    pub seed_history: bool,
}

/// Exam-area configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExamsConfig {
    /// Rooms shown per carousel page in the exam area.
    pub page_size: usize,
}

// --- Default ---

impl Default for RoomConfig {
    fn default() -> Self {
        Self { title: "Phòng của Vũ".to_owned() }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { capacity: 500, seed_history: true }
    }
}

impl Default for ExamsConfig {
    fn default() -> Self {
        Self { page_size: 3 }
    }
}
