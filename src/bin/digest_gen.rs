//! Hash each line of a wordlist into a hex digest list for the sieve
//! tools.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <wordlist> <output>", args[0]);
        std::process::exit(1);
    }

    let reader = BufReader::new(File::open(&args[1])?);
    let mut writer = BufWriter::new(File::create(&args[2])?);

    for line in reader.lines() {
        let line = line?;
        let digest = Sha256::digest(line.as_bytes());
        writeln!(writer, "{}", hex::encode(digest))?;
    }

    Ok(())
}
