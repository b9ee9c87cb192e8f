//! Error types shared by the loader, the heap and the relaxation engines.

use thiserror::Error;

/// Crate result type alias.
pub type Result<T> = std::result::Result<T, SsspError>;

/// Errors surfaced by graph construction, heap operations and file I/O.
#[derive(Debug, Error)]
pub enum SsspError {
    /// A caller-supplied argument is outside its valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex id does not exist in the graph.
    #[error("Vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: u64, count: usize },

    /// `extract_root` called with no active entries.
    #[error("Heap is empty")]
    EmptyHeap,

    /// The edge-list file could not be parsed.
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// IO error while reading a matrix or writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure for reports and configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration value could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SsspError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SsspError::MalformedInput { line, reason: reason.into() }
    }

    /// Stable negative status code used across the C ABI (0 == success).
    pub fn code(&self) -> i32 {
        match self {
            SsspError::InvalidArgument(_) => -1,
            SsspError::VertexOutOfRange { .. } => -2,
            SsspError::MalformedInput { .. } => -4,
            SsspError::EmptyHeap => -6,
            SsspError::Config(_) => -7,
            SsspError::Io(_) | SsspError::Json(_) => -8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_negative_and_distinct() {
        let errs = [
            SsspError::InvalidArgument("x".into()),
            SsspError::VertexOutOfRange { vertex: 9, count: 3 },
            SsspError::malformed(3, "bad"),
            SsspError::EmptyHeap,
            SsspError::Config("mode".into()),
            SsspError::Io(std::io::Error::new(std::io::ErrorKind::Other, "io")),
        ];
        let codes: Vec<i32> = errs.iter().map(|e| e.code()).collect();
        assert!(codes.iter().all(|&c| c < 0));
        let mut dedup = codes.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), codes.len());
    }

    #[test]
    fn malformed_message_names_line() {
        let msg = SsspError::malformed(12, "expected 3 tokens").to_string();
        assert_eq!(msg, "Malformed input at line 12: expected 3 tokens");
    }
}
