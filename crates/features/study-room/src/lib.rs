//! # Study-Room Call Controls
//!
//! State behind the video-call control bar: which controls are engaged,
//! whether the call is still live, and the wall clock shown next to the
//! room title. Button rendering is the UI's concern.

mod error;

pub use crate::error::CallError;

use bitflags::bitflags;
use chrono::Local;
use tracing::info;

bitflags! {
    /// The togglable controls of the call bar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlSet: u32 {
        const MICROPHONE = 1 << 0;
        const CAMERA = 1 << 1;
        const HAND_RAISED = 1 << 2;
        const EMOJI_TRAY = 1 << 3;
        const SETTINGS = 1 << 4;
        const SECURITY_PANEL = 1 << 5;
        const CHAT_PANEL = 1 << 6;
        const PARTICIPANTS_PANEL = 1 << 7;
    }
}

/// One participant's view of a running call.
#[derive(Debug, Clone)]
pub struct CallSession {
    title: String,
    controls: ControlSet,
    ended: bool,
}

impl CallSession {
    /// Starts a session with microphone and camera engaged.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            controls: ControlSet::MICROPHONE | ControlSet::CAMERA,
            ended: false,
        }
    }

    /// Flips one control and reports whether it is engaged afterwards.
    ///
    /// # Errors
    /// Returns [`CallError::CallEnded`] once [`Self::hang_up`] has been called.
    pub fn toggle(&mut self, control: ControlSet) -> Result<bool, CallError> {
        if self.ended {
            return Err(CallError::CallEnded);
        }

        self.controls.toggle(control);
        Ok(self.controls.contains(control))
    }

    /// Ends the call. Idempotent; controls are frozen afterwards.
    pub fn hang_up(&mut self) {
        if !self.ended {
            info!(room = %self.title, "Call ended");
        }
        self.ended = true;
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.ended
    }

    /// The currently engaged controls.
    #[must_use]
    pub const fn controls(&self) -> ControlSet {
        self.controls
    }

    /// Room display title shown next to the clock.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The wall clock as rendered in the call bar, `HH:MM:SS` (24-hour).
    #[must_use]
    pub fn clock() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    /// The abbreviated wall clock shown on small layouts, `HH:MM`.
    #[must_use]
    pub fn clock_short() -> String {
        Local::now().format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_with_microphone_and_camera() {
        let session = CallSession::new("Phòng của Vũ");
        assert!(session.is_live());
        assert_eq!(session.controls(), ControlSet::MICROPHONE | ControlSet::CAMERA);
    }

    #[test]
    fn toggling_twice_restores_the_initial_state() {
        let mut session = CallSession::new("Phòng của Vũ");
        let before = session.controls();

        assert!(session.toggle(ControlSet::HAND_RAISED).expect("call is live"));
        assert!(!session.toggle(ControlSet::HAND_RAISED).expect("call is live"));
        assert_eq!(session.controls(), before);
    }

    #[test]
    fn toggle_reports_the_new_state() {
        let mut session = CallSession::new("Phòng của Vũ");
        // Microphone starts engaged, so the first toggle mutes it.
        assert!(!session.toggle(ControlSet::MICROPHONE).expect("call is live"));
    }

    #[test]
    fn hang_up_freezes_controls_and_is_idempotent() {
        let mut session = CallSession::new("Phòng của Vũ");
        session.hang_up();
        session.hang_up();

        assert!(!session.is_live());
        let err = session.toggle(ControlSet::CAMERA).unwrap_err();
        assert_eq!(err, CallError::CallEnded);
    }

    #[test]
    fn clock_renders_24_hour_time() {
        let clock = CallSession::clock();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);

        let short = CallSession::clock_short();
        assert_eq!(short.len(), 5);
        assert_eq!(short.matches(':').count(), 1);
    }
}
