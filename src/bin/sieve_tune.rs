//! Sweep the whole bit-width range and report per-width collision
//! counts for both filter stages, to see how a target set behaves
//! before committing to bounds.

use bitsieve::io_utils::{io_cli_error, sieve_cli_error, simple_cli_error};
use bitsieve::{
    populate_channels, DigestStore, HashConfig, ProbeOutcome, BITMAP_SHIFT1, BITMAP_SHIFT2,
};
use clap::Parser;
use indicatif::ProgressBar;
use serde::Serialize;
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Digest list to analyze
    input: PathBuf,
    /// Hash algorithm layout (md5, sha1, sha256)
    #[arg(long, default_value = "sha256")]
    algo: String,
    /// Treat the input as raw binary digest words
    #[arg(long)]
    raw: bool,
    /// Smallest bit width to try
    #[arg(long, default_value_t = 16)]
    min_bits: u32,
    /// Bit width bound, exclusive
    #[arg(long, default_value_t = 24)]
    max_bits: u32,
    /// Optional CSV output path for per-width results
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Optional JSON output path for per-width results
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct Record {
    bits: u32,
    table_kib: u64,
    stage1_collisions: u64,
    stage2_collisions: u64,
    accepted: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.min_bits == 0 || args.min_bits >= args.max_bits || args.max_bits > 31 {
        return Err(simple_cli_error("bit width bounds must satisfy 1 <= min < max <= 31").into());
    }

    let config = match args.algo.as_str() {
        "md5" => HashConfig::md5(),
        "sha1" => HashConfig::sha1(),
        "sha256" => HashConfig::sha256(),
        other => return Err(simple_cli_error(&format!("unknown algorithm '{other}'")).into()),
    };

    let store = if args.raw {
        DigestStore::load_raw(&args.input, config.dgst_len)
            .map_err(|e| sieve_cli_error("loading raw digests", e))?
    } else {
        let text = fs::read_to_string(&args.input)
            .map_err(|e| io_cli_error("reading digest list", &args.input, e))?;
        DigestStore::parse_hex(&text, config.dgst_len)
            .map_err(|e| sieve_cli_error("parsing digest list", e))?
    };

    let budget = store.count() as u64 / 2;
    let nums_max = 1usize << args.max_bits;
    let mut scratch = [
        vec![0u32; nums_max],
        vec![0u32; nums_max],
        vec![0u32; nums_max],
        vec![0u32; nums_max],
    ];

    let bar = ProgressBar::new((args.max_bits - args.min_bits) as u64);
    let mut records = Vec::new();

    for bits in args.min_bits..args.max_bits {
        let mask = (1u32 << bits) - 1;
        let stage1 = full_count(populate_channels(
            &store,
            config.positions(),
            BITMAP_SHIFT1,
            mask,
            &mut scratch,
            None,
        ));
        let stage2 = full_count(populate_channels(
            &store,
            config.positions(),
            BITMAP_SHIFT2,
            mask,
            &mut scratch,
            None,
        ));

        let fits = (store.count() as u64) < (1u64 << bits);
        records.push(Record {
            bits,
            table_kib: (4u64 << bits) / 1024,
            stage1_collisions: stage1,
            stage2_collisions: stage2,
            accepted: fits || (stage1 < budget && stage2 < budget),
        });
        bar.inc(1);
    }
    bar.finish_and_clear();

    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        let mut writer = csv::Writer::from_writer(file);
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }

    if let Some(path) = &args.json {
        let file = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        serde_json::to_writer_pretty(file, &records)?;
    }

    if args.csv.is_none() && args.json.is_none() {
        println!(
            "{:>4} {:>10} {:>12} {:>12} {:>8}",
            "bits", "table_kib", "s1_coll", "s2_coll", "accept"
        );
        for r in &records {
            println!(
                "{:>4} {:>10} {:>12} {:>12} {:>8}",
                r.bits, r.table_kib, r.stage1_collisions, r.stage2_collisions, r.accepted
            );
        }
    }

    let chosen = records
        .iter()
        .find(|r| r.accepted)
        .map(|r| r.bits)
        .unwrap_or(args.max_bits - 1);
    println!("Selected width: {chosen} bits");

    Ok(())
}

fn full_count(outcome: ProbeOutcome) -> u64 {
    match outcome {
        ProbeOutcome::Collisions(count) => count,
        // unbudgeted passes always run the store to the end
        ProbeOutcome::Overflow => unreachable!("pass ran without a budget"),
    }
}
