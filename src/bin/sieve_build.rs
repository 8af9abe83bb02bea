//! Build the two-stage reject bitmaps for a target digest list and
//! report the outcome.

use bitsieve::io_utils::{io_cli_error, sieve_cli_error, simple_cli_error};
use bitsieve::{
    BitmapContext, BitmapSnapshot, BitmapStats, DigestStore, HashConfig, SessionOptions,
};
use std::fs;
use std::path::PathBuf;
use sysinfo::{System, SystemExt};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <digests> [--algo md5|sha1|sha256] [--raw] [--bitmap-min N] \
             [--bitmap-max N] [--quiet] [--json] [--out FILE]",
            args[0]
        );
        return Ok(());
    }

    let input = PathBuf::from(&args[1]);
    let mut algo = String::from("sha256");
    let mut raw = false;
    let mut json_out = false;
    let mut snapshot_out: Option<PathBuf> = None;
    let mut options = SessionOptions::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--algo" => {
                algo = flag_value(&args, i, "--algo")?.to_string();
                i += 2;
            }
            "--raw" => {
                raw = true;
                i += 1;
            }
            "--bitmap-min" => {
                options.bitmap_min = parse_width(flag_value(&args, i, "--bitmap-min")?)?;
                i += 2;
            }
            "--bitmap-max" => {
                options.bitmap_max = parse_width(flag_value(&args, i, "--bitmap-max")?)?;
                i += 2;
            }
            "--quiet" => {
                options.quiet = true;
                i += 1;
            }
            "--json" => {
                json_out = true;
                i += 1;
            }
            "--out" => {
                snapshot_out = Some(PathBuf::from(flag_value(&args, i, "--out")?));
                i += 2;
            }
            flag => {
                return Err(simple_cli_error(&format!("Unknown flag: {flag}")).into());
            }
        }
    }

    let config = algo_config(&algo)?;

    let store = if raw {
        DigestStore::load_raw(&input, config.dgst_len)
            .map_err(|e| sieve_cli_error("loading raw digests", e))?
    } else {
        let text =
            fs::read_to_string(&input).map_err(|e| io_cli_error("reading digest list", &input, e))?;
        DigestStore::parse_hex(&text, config.dgst_len)
            .map_err(|e| sieve_cli_error("parsing digest list", e))?
    };

    if !options.quiet {
        warn_if_low_memory(&options);
    }

    let ctx = BitmapContext::build(&options, &config, &store)
        .map_err(|e| sieve_cli_error("building bitmap tables", e))?;
    let stats =
        BitmapStats::collect(&ctx).map_err(|e| sieve_cli_error("collecting table stats", e))?;

    if json_out {
        let summary = serde_json::json!({
            "digests": store.count(),
            "bits": stats.bits,
            "table_bytes": stats.table_bytes,
            "expected_pass_rate": stats.expected_pass_rate(),
            "stage1_fill": stats.stage1_fill,
            "stage2_fill": stats.stage2_fill,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        stats.report();
    }

    if let Some(path) = snapshot_out {
        let snapshot =
            BitmapSnapshot::from_context(&ctx).map_err(|e| sieve_cli_error("writing snapshot", e))?;
        snapshot
            .save(&path)
            .map_err(|e| sieve_cli_error("writing snapshot", e))?;
        if !options.quiet {
            eprintln!("Wrote bitmap snapshot to {}", path.display());
        }
    }

    Ok(())
}

fn flag_value<'a>(
    args: &'a [String],
    i: usize,
    flag: &str,
) -> Result<&'a str, Box<dyn std::error::Error>> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| simple_cli_error(&format!("{flag} needs a value")).into())
}

fn parse_width(value: &str) -> Result<u32, Box<dyn std::error::Error>> {
    value
        .parse()
        .map_err(|_| simple_cli_error(&format!("invalid bit width '{value}'")).into())
}

fn algo_config(algo: &str) -> Result<HashConfig, Box<dyn std::error::Error>> {
    match algo {
        "md5" => Ok(HashConfig::md5()),
        "sha1" => Ok(HashConfig::sha1()),
        "sha256" => Ok(HashConfig::sha256()),
        other => Err(simple_cli_error(&format!("unknown algorithm '{other}'")).into()),
    }
}

/// Warn when the scratch plus final tables for the widest trial would
/// not fit in available memory.
fn warn_if_low_memory(options: &SessionOptions) {
    let mut sys = System::new();
    sys.refresh_memory();
    let available = sys.available_memory();
    // four scratch tables at the maximum width, eight final tables at
    // up to that width
    let needed = 12u64 * (4u64 << options.bitmap_max);
    if available > 0 && needed > available {
        eprintln!(
            "Warning: bitmap tables may need up to {} MiB but only {} MiB look available",
            needed / (1024 * 1024),
            available / (1024 * 1024)
        );
    }
}
