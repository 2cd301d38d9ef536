use thiserror::Error;

pub type Result<T> = std::result::Result<T, SetError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("range-endpoints of '{start}-{end}' are in reverse collating sequence order")]
    ReversedRange { start: char, end: char },

    #[error("invalid character class '{0}'")]
    UnknownClass(String),

    #[error("octal escape '\\{0}' is out of range (max \\377)")]
    OctalOutOfRange(String),

    #[error("repeat construct '{0}' expands past the maximum set length")]
    RepeatTooLarge(String),

    #[error("the [c*] repeat construct may only appear in SET2")]
    FillInSet1,

    #[error("only one [c*] repeat construct may appear in SET2")]
    MultipleFill,

    #[error("SET2 must be non-empty when SET1 is non-empty")]
    EmptySet2,
}
