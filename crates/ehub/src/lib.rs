//! Facade crate for EduHub features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ehub` and call [`init`] with the loaded [`AppConfig`] to build a
//!   [`Session`]; extend as new slices appear.

pub use ehub_domain as domain;
pub use ehub_kernel as kernel;

use ehub_chat::ChatRoom;
use ehub_domain::config::AppConfig;
use ehub_exams::ExamCatalog;
use ehub_study_room::CallSession;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Feature registry for runtime introspection.
pub mod features {
    pub use ehub_auth as auth;
    pub use ehub_chat as chat;
    pub use ehub_exams as exams;
    pub use ehub_study_room as study_room;

    use ehub_domain::constants::{AUTH, CHAT, EXAMS, STUDY_ROOM};
    use ehub_domain::modules::ModuleSet;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &[AUTH, CHAT, EXAMS, STUDY_ROOM];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }

    /// The enabled slices as a [`ModuleSet`] bitmask.
    #[must_use]
    pub fn enabled_set() -> ModuleSet {
        ENABLED.iter().fold(ModuleSet::empty(), |set, name| set | ModuleSet::from(*name))
    }
}

/// Live application state shared with UI callbacks.
///
/// Cloning is cheap; all clones observe the same chat transcript and call
/// session.
#[derive(Debug, Clone)]
pub struct Session {
    chat: Arc<RwLock<ChatRoom>>,
    exams: Arc<RwLock<ExamCatalog>>,
    call: Arc<RwLock<CallSession>>,
}

impl Session {
    /// The study-room chat transcript.
    #[must_use]
    pub fn chat(&self) -> Arc<RwLock<ChatRoom>> {
        Arc::clone(&self.chat)
    }

    /// The exam-area catalog.
    #[must_use]
    pub fn exams(&self) -> Arc<RwLock<ExamCatalog>> {
        Arc::clone(&self.exams)
    }

    /// The video-call control state.
    #[must_use]
    pub fn call(&self) -> Arc<RwLock<CallSession>> {
        Arc::clone(&self.call)
    }
}

/// Initialize all enabled features and compose the shared session state.
#[must_use]
pub fn init(config: &AppConfig) -> Session {
    let chat = if config.chat.seed_history {
        ChatRoom::with_seed_history(&config.room.title, config.chat.capacity)
    } else {
        ChatRoom::new(&config.room.title, config.chat.capacity)
    };
    info!(messages = chat.len(), "Chat slice initialized");

    let exams = ExamCatalog::new();
    info!("Exams slice initialized");

    let call = CallSession::new(&config.room.title);
    info!(room = %config.room.title, "Study-room slice initialized");

    Session {
        chat: Arc::new(RwLock::new(chat)),
        exams: Arc::new(RwLock::new(exams)),
        call: Arc::new(RwLock::new(call)),
    }
}
