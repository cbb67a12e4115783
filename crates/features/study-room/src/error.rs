/// A specialized [`CallError`] enum of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// The call was hung up; controls can no longer change.
    #[error("Call has already ended")]
    CallEnded,
}
