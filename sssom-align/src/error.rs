//! Error types for alignment conversion

use std::path::PathBuf;

/// Error type for alignment conversion and curation operations
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input could not be parsed as RDF
    #[error("RDF parse error: {0}")]
    InvalidRdf(#[from] oxigraph::store::LoaderError),

    /// A generated IRI is not valid
    #[error("invalid IRI: {0}")]
    Iri(#[from] oxigraph::model::IriParseError),

    /// The in-memory triple store failed
    #[error("store error: {0}")]
    Storage(#[from] oxigraph::store::StorageError),

    /// Serializing an output graph failed
    #[error("serialization error: {0}")]
    Serialize(#[from] oxigraph::store::SerializerError),
}

/// Result type for alignment operations
pub type Result<T> = std::result::Result<T, AlignError>;

impl AlignError {
    /// Create an I/O error carrying the offending path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
