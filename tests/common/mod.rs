//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a file into a temporary directory and return its path
#[allow(dead_code)]
pub fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    path
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Unit vector along `axis` in a `dims`-dimensional space
#[allow(dead_code)]
pub fn unit_vector(axis: usize, dims: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    if axis < dims {
        v[axis] = 1.0;
    }
    v
}

/// Mock gateway response bodies
pub mod mock_data {
    use serde_json::json;

    /// Generate a chat completion response body with a single choice
    #[allow(dead_code)]
    pub fn chat_completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20}
        })
    }

    /// Generate an embeddings response body with a single vector
    #[allow(dead_code)]
    pub fn embeddings_body(embedding: &[f32]) -> serde_json::Value {
        json!({
            "object": "list",
            "data": [{
                "object": "embedding",
                "embedding": embedding,
                "index": 0
            }],
            "model": "text-embedding-3-large",
            "usage": {"prompt_tokens": 5, "total_tokens": 5}
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_write_temp_file() {
        let dir = temp_dir();
        let path = write_temp_file(&dir, "sample.txt", "hello");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_unit_vector() {
        assert_eq!(unit_vector(1, 3), vec![0.0, 1.0, 0.0]);
        assert_eq!(unit_vector(5, 3), vec![0.0, 0.0, 0.0]);
    }
}
