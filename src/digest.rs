//! Storage for the target digest set.

use crate::error::BitsieveError;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Ordered, append-then-freeze collection of fixed-width digests.
///
/// Digests are stored back to back as 32-bit words. The per-digest word
/// count is fixed at construction and every accessor indexes relative
/// to it. Once the store is handed to the filter builder it is only
/// ever read.
pub struct DigestStore {
    words: Vec<u32>,
    dgst_len: usize,
}

impl DigestStore {
    /// Create an empty store for `dgst_len`-word digests.
    pub fn new(dgst_len: usize) -> Self {
        assert!(dgst_len > 0, "digest width cannot be zero");
        Self {
            words: Vec::new(),
            dgst_len,
        }
    }

    /// Build a store from a flat word buffer.
    pub fn from_words(words: Vec<u32>, dgst_len: usize) -> Result<Self, BitsieveError> {
        if dgst_len == 0 {
            return Err(BitsieveError::Config("digest width cannot be zero".into()));
        }
        if words.len() % dgst_len != 0 {
            return Err(BitsieveError::Digest(format!(
                "word buffer length {} is not a multiple of digest width {}",
                words.len(),
                dgst_len
            )));
        }
        Ok(Self { words, dgst_len })
    }

    /// Append one digest. Panics when the slice width does not match.
    pub fn push(&mut self, digest: &[u32]) {
        assert_eq!(digest.len(), self.dgst_len, "digest width mismatch");
        self.words.extend_from_slice(digest);
    }

    pub fn count(&self) -> usize {
        self.words.len() / self.dgst_len
    }

    pub fn dgst_len(&self) -> usize {
        self.dgst_len
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word `pos` of digest `index`.
    pub fn word(&self, index: usize, pos: usize) -> u32 {
        self.words[index * self.dgst_len + pos]
    }

    /// All words of digest `index`.
    pub fn digest(&self, index: usize) -> &[u32] {
        let start = index * self.dgst_len;
        &self.words[start..start + self.dgst_len]
    }

    /// Parse one hex digest per line.
    ///
    /// Blank lines are skipped. Each digest must decode to exactly
    /// `4 * dgst_len` bytes. Words are taken little-endian per 4-byte
    /// group, the layout comparison kernels consume digests in.
    pub fn parse_hex(text: &str, dgst_len: usize) -> Result<Self, BitsieveError> {
        let mut store = Self::from_words(Vec::new(), dgst_len)?;
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let bytes = hex::decode(line)
                .map_err(|_| BitsieveError::Digest(format!("line {}: invalid hex", lineno + 1)))?;
            if bytes.len() != dgst_len * 4 {
                return Err(BitsieveError::Digest(format!(
                    "line {}: expected {} digest bytes, got {}",
                    lineno + 1,
                    dgst_len * 4,
                    bytes.len()
                )));
            }
            for chunk in bytes.chunks_exact(4) {
                store.words.push(u32::from_le_bytes(chunk.try_into().unwrap()));
            }
        }
        Ok(store)
    }

    /// Load raw native-endian digest words from a binary file.
    pub fn load_raw<P: AsRef<Path>>(path: P, dgst_len: usize) -> Result<Self, BitsieveError> {
        if dgst_len == 0 {
            return Err(BitsieveError::Config("digest width cannot be zero".into()));
        }
        let file = File::open(path.as_ref())?;
        let mmap = unsafe { Mmap::map(&file)? };
        if mmap.len() % (dgst_len * 4) != 0 {
            return Err(BitsieveError::Digest(format!(
                "file size {} is not a multiple of the {}-byte digest width",
                mmap.len(),
                dgst_len * 4
            )));
        }
        let words = bytemuck::try_cast_slice::<_, u32>(&mmap[..])
            .map_err(|e| BitsieveError::Digest(format!("raw digest file: {e}")))?
            .to_vec();
        Self::from_words(words, dgst_len)
    }
}
