pub mod cli;
pub mod error;
pub mod reader;
pub mod sha256;
pub mod verify;

pub use error::{Error, Result};

use std::path::Path;

use crate::reader::ChunkReader;
use crate::sha256::{Sha256, DIGEST_SIZE};

/// Stream a file through the digest engine in bounded memory.
pub fn hash_file(path: &Path) -> Result<[u8; DIGEST_SIZE]> {
    let mut reader = ChunkReader::open(path)?;
    let mut hasher = Sha256::new();
    while let Some(chunk) = reader.next_chunk()? {
        hasher.update(chunk);
    }
    Ok(hasher.finalize())
}
