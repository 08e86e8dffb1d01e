//! Error type for sequencing operations.

use crate::validation::ValidationError;

/// Result type for sequencing operations.
pub type SequencingResult<T> = Result<T, SequencingError>;

/// Error type for sequencing operations.
///
/// An unknown product pair is never an error: it costs 0.
#[derive(Debug, thiserror::Error)]
pub enum SequencingError {
    /// The plan failed validation. Carries every detected problem.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The plan has more blocks than exhaustive search is allowed to handle.
    #[error("plan has {blocks} blocks, exhaustive search is limited to {limit}")]
    TooManyBlocks { blocks: usize, limit: usize },

    /// A search monitor requested termination before the search completed.
    #[error("search terminated after {evaluated} permutations: {reason}")]
    SearchTerminated { reason: String, evaluated: u64 },

    /// A plan used for positional timestamp reassignment has the wrong length.
    #[error("plan length mismatch: expected {expected} entries, got {actual}")]
    PlanLengthMismatch { expected: usize, actual: usize },

    /// Configuration or cost table JSON could not be parsed.
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SequencingError {
    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SequencingError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SequencingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SequencingError::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}
