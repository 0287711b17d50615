use thiserror::Error;

/// Failures raised while evaluating a template against a context.
///
/// There is one underlying failure, a missing required field. The other two
/// variants only record where in the tree it surfaced.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("context missing required field {0:?}")]
    MissingRequiredField(String),

    #[error("error evaluating alternative {index}: {source}")]
    Alternative {
        index: usize,
        #[source]
        source: Box<EvalError>,
    },

    #[error("error evaluating template part {index}: {source}")]
    Part {
        index: usize,
        #[source]
        source: Box<EvalError>,
    },
}

impl EvalError {
    /// Id of the required field at the root of this error chain.
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            EvalError::MissingRequiredField(id) => Some(id),
            EvalError::Alternative { source, .. } | EvalError::Part { source, .. } => {
                source.missing_field()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
