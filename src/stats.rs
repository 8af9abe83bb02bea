//! Occupancy statistics over a finalized bitmap context.

use crate::bitmap::BitmapContext;
use crate::error::BitsieveError;
use serde::Serialize;

/// Fill-rate summary for the eight channel tables.
#[derive(Debug, Clone, Serialize)]
pub struct BitmapStats {
    /// Selected table bit width.
    pub bits: u32,
    /// Byte size of one channel table.
    pub table_bytes: u64,
    /// Fraction of set bits per stage-1 channel.
    pub stage1_fill: [f64; 4],
    /// Fraction of set bits per stage-2 channel.
    pub stage2_fill: [f64; 4],
}

impl BitmapStats {
    pub fn collect(ctx: &BitmapContext) -> Result<Self, BitsieveError> {
        if !ctx.is_enabled() {
            return Err(BitsieveError::Config(
                "no bitmap tables were built for this session".into(),
            ));
        }
        Ok(Self {
            bits: ctx.bits(),
            table_bytes: ctx.size_bytes(),
            stage1_fill: fill_rates(ctx.stage1()),
            stage2_fill: fill_rates(ctx.stage2()),
        })
    }

    /// Estimated fraction of random candidates surviving both stages,
    /// treating the eight channels as independent.
    pub fn expected_pass_rate(&self) -> f64 {
        let mut rate = 1.0;
        for fill in self.stage1_fill.iter().chain(self.stage2_fill.iter()) {
            rate *= fill;
        }
        rate
    }

    pub fn report(&self) {
        eprintln!(
            "Bitmap tables: {} bits, {} bytes per table, expected pass rate {:.3e}",
            self.bits,
            self.table_bytes,
            self.expected_pass_rate()
        );
    }
}

fn fill_rates(stage: &[Vec<u32>; 4]) -> [f64; 4] {
    let mut rates = [0.0f64; 4];
    for (rate, table) in rates.iter_mut().zip(stage.iter()) {
        let set: u64 = table.iter().map(|word| word.count_ones() as u64).sum();
        *rate = set as f64 / (table.len() as u64 * 32) as f64;
    }
    rates
}
