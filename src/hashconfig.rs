//! Per-algorithm digest layout parameters.

use crate::error::BitsieveError;

/// Digest layout for one hash algorithm.
///
/// `dgst_pos0..3` select the four digest words fed to the reject
/// bitmaps. The positions differ per algorithm: they pick the words
/// whose bits are most uniformly distributed, so the filter slots
/// spread evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    /// 32-bit words per digest.
    pub dgst_len: usize,
    pub dgst_pos0: usize,
    pub dgst_pos1: usize,
    pub dgst_pos2: usize,
    pub dgst_pos3: usize,
}

impl HashConfig {
    /// Build a validated layout from a word count and four positions.
    pub fn new(dgst_len: usize, positions: [usize; 4]) -> Result<Self, BitsieveError> {
        let config = Self {
            dgst_len,
            dgst_pos0: positions[0],
            dgst_pos1: positions[1],
            dgst_pos2: positions[2],
            dgst_pos3: positions[3],
        };
        config.validate()?;
        Ok(config)
    }

    /// MD5 digest layout.
    pub fn md5() -> Self {
        Self {
            dgst_len: 4,
            dgst_pos0: 0,
            dgst_pos1: 3,
            dgst_pos2: 2,
            dgst_pos3: 1,
        }
    }

    /// SHA-1 digest layout.
    pub fn sha1() -> Self {
        Self {
            dgst_len: 5,
            dgst_pos0: 3,
            dgst_pos1: 4,
            dgst_pos2: 2,
            dgst_pos3: 1,
        }
    }

    /// SHA-256 digest layout.
    pub fn sha256() -> Self {
        Self {
            dgst_len: 8,
            dgst_pos0: 3,
            dgst_pos1: 7,
            dgst_pos2: 2,
            dgst_pos3: 6,
        }
    }

    /// The four selected positions in channel order.
    pub fn positions(&self) -> [usize; 4] {
        [self.dgst_pos0, self.dgst_pos1, self.dgst_pos2, self.dgst_pos3]
    }

    pub fn validate(&self) -> Result<(), BitsieveError> {
        if self.dgst_len == 0 {
            return Err(BitsieveError::Config("digest width cannot be zero".into()));
        }
        for pos in self.positions() {
            if pos >= self.dgst_len {
                return Err(BitsieveError::Config(format!(
                    "selected word position {} out of range for {}-word digests",
                    pos, self.dgst_len
                )));
            }
        }
        Ok(())
    }
}
