//! Smoke test against the real binary.
//!
//! The real run blocks on genuine sleeps (typewriter delays, 2 s pauses,
//! 4096 animation ticks) and takes tens of seconds, so it is ignored by
//! default. Run it with `cargo test -- --ignored`.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
#[ignore = "runs the full animation with real sleeps (~30s)"]
fn binary_runs_the_whole_show_and_exits_zero() {
    let mut cmd = Command::cargo_bin("ansi-hello").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\x1b[?25l"))
        .stdout(predicate::str::contains("Hello, World !!!"))
        .stdout(predicate::str::ends_with("\x1b[11;1f\x1b[0m\x1b[?25h"));
}
