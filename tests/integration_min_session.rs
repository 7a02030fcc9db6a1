// Minimal integration test that drives the compiled binary through a PTY.
// This exercises the real event loop and crossterm input handling.
//
// Notes:
// - Requires a TTY; uses expectrl which allocates a pseudo terminal.
// - Marked Unix-only and ignored by default to avoid CI/platform issues.
// - Run manually via: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn single_word_round_unlocks_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let words = dir.path().join("words.json");
    std::fs::write(&words, r#"{ "name": "one", "size": 1, "words": ["vault"] }"#)?;

    let bin = assert_cmd::cargo::cargo_bin("termlink");
    let cmd = format!("{} -s 20 -f {}", bin.display(), words.display());

    let mut p = spawn(cmd)?;
    std::thread::sleep(Duration::from_millis(200));

    // Only one word, so it has to be the password
    p.send("vault\r")?;
    std::thread::sleep(Duration::from_millis(200));

    // Any key leaves the unlocked screen
    p.send("x")?;

    p.expect(Eof)?;
    Ok(())
}
