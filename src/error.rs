use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Invalid chord symbol: '{0}'")]
    InvalidChord(String),

    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    #[error("Transposition offset {0} is outside the supported range -5..=+6")]
    OffsetOutOfRange(i32),
}
