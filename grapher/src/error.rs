use std::fmt;

/// Error type graphers return. Graphers are external code, so any error will do.
pub type GrapherError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum GraphError {
    /// No grapher is registered for the unit's type.
    NoGrapher { unit_type: String },
    /// The grapher itself failed.
    Grapher { unit: String, source: GrapherError },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NoGrapher { unit_type } => {
                write!(f, "no grapher registered for source unit type {unit_type:?}")
            }
            GraphError::Grapher { unit, source } => write!(f, "graphing {unit} failed: {source}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::NoGrapher { .. } => None,
            GraphError::Grapher { source, .. } => Some(source.as_ref()),
        }
    }
}
