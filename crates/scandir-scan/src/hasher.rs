//! Streaming content digests.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use scandir_core::{ContentHash, HashAlgorithm, ScanConfig, ScanError};

/// Default read chunk (64 KiB).
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Incremental 256-bit digest.
trait Digester {
    fn absorb(&mut self, data: &[u8]);
    fn finish(self) -> [u8; 32];
}

impl Digester for Sha256 {
    fn absorb(&mut self, data: &[u8]) {
        Digest::update(self, data);
    }

    fn finish(self) -> [u8; 32] {
        self.finalize().into()
    }
}

impl Digester for blake3::Hasher {
    fn absorb(&mut self, data: &[u8]) {
        self.update(data);
    }

    fn finish(self) -> [u8; 32] {
        *self.finalize().as_bytes()
    }
}

/// Hashes whole files in fixed-size chunks.
///
/// Memory use is bounded by the buffer size, whatever the file size.
#[derive(Debug, Clone)]
pub struct FileHasher {
    algorithm: HashAlgorithm,
    buffer_size: usize,
}

impl FileHasher {
    /// Create a hasher for the given algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create a hasher from scan settings.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.algorithm).with_buffer_size(config.buffer_size)
    }

    /// Set the read chunk size.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Digest the full content of a file.
    ///
    /// Open and read failures are returned as [`ScanError::Hash`] with the
    /// file path. The file is closed on every path out of this function.
    pub fn digest(&self, path: &Path) -> Result<ContentHash, ScanError> {
        let file = File::open(path).map_err(|e| ScanError::hash(path, e))?;

        let hash = match self.algorithm {
            HashAlgorithm::Sha256 => self.stream(file, Sha256::new(), path)?,
            HashAlgorithm::Blake3 => self.stream(file, blake3::Hasher::new(), path)?,
        };

        debug!(path = %path.display(), algorithm = %self.algorithm, "Hashed file");
        Ok(hash)
    }

    fn stream<D: Digester>(
        &self,
        mut file: File,
        mut digester: D,
        path: &Path,
    ) -> Result<ContentHash, ScanError> {
        let mut buffer = vec![0u8; self.buffer_size];

        loop {
            let bytes_read = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ScanError::hash(path, e)),
            };
            digester.absorb(&buffer[..bytes_read]);
        }

        Ok(ContentHash::new(digester.finish()))
    }
}

impl Default for FileHasher {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

/// SHA-256 of a file as a lowercase hex string.
pub fn calculate_hash(path: impl AsRef<Path>) -> Result<String, ScanError> {
    FileHasher::default()
        .digest(path.as_ref())
        .map(|hash| hash.to_hex())
}
