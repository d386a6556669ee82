#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    /// `reduce` was called without a seed on a sequence with no elements.
    #[error("Reduce of an empty sequence with no initial value.")]
    EmptyFold,

    #[error("Slice step must be a positive integer.")]
    ZeroStep,
}

pub type Result<T> = std::result::Result<T, SequenceError>;
