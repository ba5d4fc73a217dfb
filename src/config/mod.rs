//! JSON configuration for the command-line tools.
//!
//! Every tool reads a single config file passed as its first argument. Missing
//! sections fall back to their `Default` impls.

pub mod edge;
pub mod tuning;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub use edge::{EdgeOutputConfig, EdgeToolConfig, PreprocessConfig};
pub use tuning::{TuningOutputConfig, TuningToolConfig};

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
