//! Forward-only chunked file reading with a fixed memory ceiling.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::sha256::BLOCK_SIZE;

/// Bytes handed out per chunk: 4096 SHA-256 blocks, 256 KiB.
pub const CHUNK_SIZE: usize = 4096 * BLOCK_SIZE;

/// Sequential reader that exposes a file as chunks of at most `CHUNK_SIZE`
/// bytes, holding only one chunk in memory at a time.
pub struct ChunkReader {
    path: PathBuf,
    reader: BufReader<File>,
    pending: usize,
}

impl ChunkReader {
    /// Open `path` for sequential binary reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::with_capacity(CHUNK_SIZE, file),
            pending: 0,
        })
    }

    /// The next chunk of the file, or `None` once the end is reached.
    ///
    /// The returned slice stays valid until the next call, which consumes it.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        self.reader.consume(self.pending);
        self.pending = 0;

        let chunk = self.reader.fill_buf().map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })?;
        self.pending = chunk.len();
        if chunk.is_empty() {
            Ok(None)
        } else {
            Ok(Some(chunk))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(content: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn empty_file_yields_no_chunks() {
        let (_dir, path) = file_with(b"");
        let mut reader = ChunkReader::open(&path).unwrap();
        assert!(reader.next_chunk().unwrap().is_none());
        assert!(reader.next_chunk().unwrap().is_none());
    }

    #[test]
    fn short_file_yields_one_partial_chunk() {
        let (_dir, path) = file_with(b"abc");
        let mut reader = ChunkReader::open(&path).unwrap();
        assert_eq!(reader.next_chunk().unwrap(), Some(&b"abc"[..]));
        assert!(reader.next_chunk().unwrap().is_none());
    }

    /// A file of exactly one chunk ends cleanly, with no empty tail chunk
    #[test]
    fn chunk_size_multiple_ends_cleanly() {
        let (_dir, path) = file_with(&vec![0x5au8; CHUNK_SIZE]);
        let mut reader = ChunkReader::open(&path).unwrap();
        let mut total = 0;
        while let Some(chunk) = reader.next_chunk().unwrap() {
            assert!(!chunk.is_empty());
            total += chunk.len();
        }
        assert_eq!(total, CHUNK_SIZE);
    }

    #[test]
    fn chunks_cover_the_file_in_order() {
        let content = (0..3 * CHUNK_SIZE + 17)
            .map(|i| (i % 256) as u8)
            .collect::<Vec<_>>();
        let (_dir, path) = file_with(&content);

        let mut reader = ChunkReader::open(&path).unwrap();
        let mut seen = Vec::new();
        while let Some(chunk) = reader.next_chunk().unwrap() {
            assert!(chunk.len() <= CHUNK_SIZE);
            seen.extend_from_slice(chunk);
        }
        assert!(seen == content, "reassembled bytes differ from the file");
    }

    #[test]
    fn missing_file_reports_the_path() {
        match ChunkReader::open(Path::new("definitely/not/here.bin")) {
            Err(Error::Open { path, .. }) => {
                assert_eq!(path, PathBuf::from("definitely/not/here.bin"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("open succeeded on a missing path"),
        }
    }
}
