use crate::Operation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The embedded language service failed while answering a request.
    /// The whole operation fails; no partial answer is returned.
    #[error("Template service error in {operation} for {file_name}: {source}")]
    Template {
        operation: Operation,
        file_name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Host service error: {0}")]
    Host(#[from] anyhow::Error),
}

impl ServiceError {
    #[must_use]
    pub fn template(operation: Operation, file_name: &str, source: anyhow::Error) -> Self {
        Self::Template {
            operation,
            file_name: file_name.to_string(),
            source,
        }
    }

    /// The operation that failed, when the embedded service was at fault
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::Template { operation, .. } => Some(*operation),
            Self::Host(_) => None,
        }
    }
}
