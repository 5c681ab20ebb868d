use std::path::PathBuf;

use thiserror::Error;

use crate::graph::VertexId;

/** errors raised while building a graph from an edge list */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// an endpoint is not in [0, n)
    #[error("invalid edge ({u}, {v}): vertices must be in [0, {n})")]
    InvalidEdge {
        /// first endpoint
        u: VertexId,
        /// second endpoint
        v: VertexId,
        /// number of vertices of the graph
        n: usize,
    },
}

/** errors raised by the graph loaders (reading and parsing instance files) */
#[derive(Debug, Error)]
pub enum LoadError {
    /// the file cannot be read
    #[error("unable to read {path}: {source}")]
    Io {
        /// file that was read
        path: PathBuf,
        /// underlying error
        source: std::io::Error,
    },
    /// the textual content does not follow the expected format
    #[error("{format} parse error at line {line}: {message}")]
    Parse {
        /// instance format name
        format: &'static str,
        /// line of the error (1-based)
        line: usize,
        /// reason
        message: String,
    },
    /// malformed JSON instance
    #[error("json instance: {0}")]
    Json(#[from] serde_json::Error),
    /// the parsed edge list does not describe a valid graph
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// the parsing thread could not be spawned or panicked
    #[error("loader thread: {0}")]
    Thread(String),
}

/** errors raised during the enumeration */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// the stopping criterion fired before the enumeration completed
    #[error("search cancelled after {nb_cliques} maximal cliques")]
    Cancelled {
        /// number of cliques delivered to the sink before cancellation
        nb_cliques: usize,
    },
}
