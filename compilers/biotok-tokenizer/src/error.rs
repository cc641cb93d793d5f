use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The lazy token sequence was advanced after its last span.
    #[error("token sequence is exhausted")]
    Exhausted,
}
