use serde_json::Value;
use std::fs;
use std::process::Command;

#[test]
fn build_reports_selected_width_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    let digests = dir.path().join("digests.txt");
    fs::write(&wordlist, "alpha\nbravo\ncharlie\ndelta\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_digest_gen"))
        .args([wordlist.to_str().unwrap(), digests.to_str().unwrap()])
        .status()
        .expect("digest_gen failed");
    assert!(status.success());

    let output = Command::new(env!("CARGO_BIN_EXE_sieve_build"))
        .args([
            digests.to_str().unwrap(),
            "--algo",
            "sha256",
            "--bitmap-min",
            "4",
            "--bitmap-max",
            "8",
            "--quiet",
            "--json",
        ])
        .output()
        .expect("sieve_build failed");
    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["digests"], 4);
    // four digests fit a 4-bit table outright
    assert_eq!(summary["bits"], 4);
    assert_eq!(summary["table_bytes"], 64);
}

#[test]
fn build_writes_a_loadable_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    let digests = dir.path().join("digests.txt");
    let snapshot = dir.path().join("targets.sieve");
    fs::write(&wordlist, "one\ntwo\nthree\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_digest_gen"))
        .args([wordlist.to_str().unwrap(), digests.to_str().unwrap()])
        .status()
        .expect("digest_gen failed");
    assert!(status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_sieve_build"))
        .args([
            digests.to_str().unwrap(),
            "--bitmap-min",
            "2",
            "--bitmap-max",
            "6",
            "--quiet",
            "--out",
            snapshot.to_str().unwrap(),
        ])
        .status()
        .expect("sieve_build failed");
    assert!(status.success());

    let restored = bitsieve::BitmapSnapshot::load(&snapshot)
        .unwrap()
        .into_context()
        .unwrap();
    assert_eq!(restored.bits(), 2);
}

#[test]
fn tune_writes_per_width_csv() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    let digests = dir.path().join("digests.txt");
    let csv_out = dir.path().join("widths.csv");
    fs::write(&wordlist, "red\ngreen\nblue\nyellow\ncyan\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_digest_gen"))
        .args([wordlist.to_str().unwrap(), digests.to_str().unwrap()])
        .status()
        .expect("digest_gen failed");
    assert!(status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_sieve_tune"))
        .args([
            digests.to_str().unwrap(),
            "--min-bits",
            "2",
            "--max-bits",
            "5",
            "--csv",
            csv_out.to_str().unwrap(),
        ])
        .status()
        .expect("sieve_tune failed");
    assert!(status.success());

    let text = fs::read_to_string(&csv_out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("bits,table_kib,stage1_collisions,stage2_collisions,accepted")
    );
    assert_eq!(lines.count(), 3);
}

#[test]
fn unknown_flag_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_sieve_build"))
        .args(["whatever.txt", "--bogus"])
        .output()
        .expect("sieve_build failed to spawn");
    assert!(!output.status.success());
}
