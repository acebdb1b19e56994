//! Scan and output configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Default read buffer for streaming digests.
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Default JSON indentation width.
const DEFAULT_INDENT: usize = 2;

/// Digest used for content hashes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256.
    #[default]
    Sha256,
    /// BLAKE3 with 256-bit output.
    Blake3,
}

/// What a traversal does when an entry cannot be read.
///
/// Chosen by the operation that starts the walk, never by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first error and return it.
    Abort,
    /// Drop the failing entry and keep walking.
    Skip,
}

/// Configuration for a hashed directory scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// Name suffixes selecting which files get hashed (case-insensitive).
    #[builder(default)]
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Digest algorithm.
    #[builder(default)]
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Chunk size used when streaming file content into the digest.
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if self.buffer_size == Some(0) {
            return Err("Buffer size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config scanning `root` and hashing files matching `extensions`.
    pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            extensions: extensions.into_iter().map(Into::into).collect(),
            algorithm: HashAlgorithm::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".", Vec::<String>::new())
    }
}

/// Configuration for JSON output files.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct OutputConfig {
    /// Indentation width in spaces.
    #[builder(default = "DEFAULT_INDENT")]
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl OutputConfig {
    /// Create a new output config builder.
    pub fn builder() -> OutputConfigBuilder {
        OutputConfigBuilder::default()
    }

    /// Create a config with the given indentation width.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }
}

/// Split a comma-separated extension list, trimming whitespace and dropping
/// empty items.
pub fn parse_extensions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::builder()
            .root("/home/user")
            .extensions(vec![".txt".to_string()])
            .algorithm(HashAlgorithm::Blake3)
            .buffer_size(4096usize)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.extensions, vec![".txt".to_string()]);
        assert_eq!(config.algorithm, HashAlgorithm::Blake3);
        assert_eq!(config.buffer_size, 4096);
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ScanConfig::builder().root("/data").build().unwrap();
        assert!(config.extensions.is_empty());
        assert_eq!(config.algorithm, HashAlgorithm::Sha256);
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_config_builder_rejects_missing_root() {
        assert!(ScanConfig::builder().build().is_err());
        assert!(ScanConfig::builder().root("").build().is_err());
    }

    #[test]
    fn test_config_builder_rejects_zero_buffer() {
        let result = ScanConfig::builder().root("/data").buffer_size(0usize).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!(HashAlgorithm::from_str("sha256").unwrap(), HashAlgorithm::Sha256);
        assert_eq!(HashAlgorithm::from_str("BLAKE3").unwrap(), HashAlgorithm::Blake3);
        assert!(HashAlgorithm::from_str("md5").is_err());
        assert_eq!(HashAlgorithm::Blake3.to_string(), "blake3");
    }

    #[test]
    fn test_output_config_default() {
        assert_eq!(OutputConfig::default().indent, 2);
        let config = OutputConfig::builder().indent(4usize).build().unwrap();
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_parse_extensions() {
        assert_eq!(
            parse_extensions(" .txt, md ,,.JSON "),
            vec![".txt".to_string(), "md".to_string(), ".JSON".to_string()]
        );
        assert!(parse_extensions("").is_empty());
        assert!(parse_extensions(" , ").is_empty());
    }
}
