/// A specialized [`ExamError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ExamError {
    /// A room with this subject code is already catalogued.
    #[error("Exam room {code} is already catalogued")]
    DuplicateCode { code: String },
}
