//! Session options handed in by the front end.

use crate::error::BitsieveError;

/// Default smallest table bit width to try.
pub const DEFAULT_BITMAP_MIN: u32 = 16;
/// Default bit width search bound, exclusive.
pub const DEFAULT_BITMAP_MAX: u32 = 24;

/// Option state for one session.
///
/// The boolean flags select diagnostic run modes that perform no
/// cracking work; any of them disables reject-filter construction.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Print the keyspace size and exit.
    pub keyspace: bool,
    /// List unrecovered target hashes and exit.
    pub left: bool,
    /// List already-recovered target hashes and exit.
    pub show: bool,
    /// Print usage and exit.
    pub usage: bool,
    /// Print version and exit.
    pub version: bool,
    /// Query compute backend information and exit.
    pub backend_info: bool,
    /// Suppress progress output.
    pub quiet: bool,
    /// Smallest table bit width to try.
    pub bitmap_min: u32,
    /// Bit width search bound, exclusive.
    pub bitmap_max: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            keyspace: false,
            left: false,
            show: false,
            usage: false,
            version: false,
            backend_info: false,
            quiet: false,
            bitmap_min: DEFAULT_BITMAP_MIN,
            bitmap_max: DEFAULT_BITMAP_MAX,
        }
    }
}

impl SessionOptions {
    /// True when the session runs a diagnostic mode with no cracking
    /// work, in which case no reject filter is built.
    pub fn filtering_disabled(&self) -> bool {
        self.keyspace || self.left || self.show || self.usage || self.version || self.backend_info
    }

    pub fn validate(&self) -> Result<(), BitsieveError> {
        if self.bitmap_min == 0 {
            return Err(BitsieveError::Config("bitmap-min must be at least 1".into()));
        }
        if self.bitmap_max > 31 {
            return Err(BitsieveError::Config("bitmap-max cannot exceed 31".into()));
        }
        if self.bitmap_min >= self.bitmap_max {
            return Err(BitsieveError::Config(format!(
                "bitmap-min {} must be below bitmap-max {}",
                self.bitmap_min, self.bitmap_max
            )));
        }
        Ok(())
    }
}
