//! Persistence for finalized bitmap tables.
//!
//! A snapshot is a plain serializable image of a built context, meant
//! for offline inspection and for skipping the width search when the
//! same target set is attacked again.

use crate::bitmap::{BitmapContext, BITMAP_SHIFT1, BITMAP_SHIFT2};
use crate::error::BitsieveError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk image of a finalized context.
#[derive(Serialize, Deserialize)]
pub struct BitmapSnapshot {
    pub bits: u32,
    pub shift1: u32,
    pub shift2: u32,
    pub stage1: Vec<Vec<u32>>,
    pub stage2: Vec<Vec<u32>>,
}

impl BitmapSnapshot {
    pub fn from_context(ctx: &BitmapContext) -> Result<Self, BitsieveError> {
        if !ctx.is_enabled() {
            return Err(BitsieveError::Snapshot(
                "cannot snapshot a disabled context".into(),
            ));
        }
        Ok(Self {
            bits: ctx.bits(),
            shift1: ctx.shift1(),
            shift2: ctx.shift2(),
            stage1: ctx.stage1().to_vec(),
            stage2: ctx.stage2().to_vec(),
        })
    }

    /// Rebuild a finalized context, validating the table shape first.
    pub fn into_context(self) -> Result<BitmapContext, BitsieveError> {
        if self.bits == 0 || self.bits > 31 {
            return Err(BitsieveError::Snapshot(format!(
                "invalid bit width {}",
                self.bits
            )));
        }
        if self.shift1 != BITMAP_SHIFT1 || self.shift2 != BITMAP_SHIFT2 {
            return Err(BitsieveError::Snapshot(format!(
                "unsupported shift pair ({}, {})",
                self.shift1, self.shift2
            )));
        }
        let nums = 1usize << self.bits;
        let stage1 = stage_array(self.stage1, nums)?;
        let stage2 = stage_array(self.stage2, nums)?;
        Ok(BitmapContext::from_parts(self.bits, stage1, stage2))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BitsieveError> {
        let data =
            bincode::serialize(self).map_err(|e| BitsieveError::Snapshot(e.to_string()))?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BitsieveError> {
        let data = fs::read(path)?;
        bincode::deserialize(&data).map_err(|e| BitsieveError::Snapshot(e.to_string()))
    }
}

fn stage_array(tables: Vec<Vec<u32>>, nums: usize) -> Result<[Vec<u32>; 4], BitsieveError> {
    let stage: [Vec<u32>; 4] = tables
        .try_into()
        .map_err(|_| BitsieveError::Snapshot("expected four channel tables per stage".into()))?;
    for table in &stage {
        if table.len() != nums {
            return Err(BitsieveError::Snapshot(format!(
                "channel table holds {} words, expected {}",
                table.len(),
                nums
            )));
        }
    }
    Ok(stage)
}
