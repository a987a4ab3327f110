use thiserror::Error;

/// Errors raised when constructing a typewriter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimatorError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhraseList,

    #[error("phrase {index} has no text")]
    EmptyPhrase { index: usize },
}
