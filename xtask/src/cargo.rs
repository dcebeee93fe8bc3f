// Licensed under the Apache-2.0 license

//! Cargo invocations from the workspace root.

use crate::PROJECT_ROOT;
use anyhow::{bail, Result};
use std::process::{Command, Stdio};

/// Runs `cargo` with `args`, failing with `failure` on a non-zero exit.
pub(crate) fn run(args: &[&str], failure: &str) -> Result<()> {
    run_with_stdout(args, failure, Stdio::inherit())
}

fn run_with_stdout(args: &[&str], failure: &str, stdout: Stdio) -> Result<()> {
    let status = Command::new("cargo")
        .current_dir(&*PROJECT_ROOT)
        .args(args)
        .stdout(stdout)
        .status()?;
    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}

pub(crate) fn format() -> Result<()> {
    println!("Running: cargo fmt --check");
    run(&["fmt", "--all", "--check"], "run \"cargo fmt --all\"")
}

/// Fails if building the workspace would have to touch `Cargo.lock`.
pub(crate) fn lock_check() -> Result<()> {
    println!("Checking Cargo.lock");
    run_with_stdout(
        &["tree", "--workspace", "--locked"],
        "Cargo.lock is out of date",
        Stdio::null(),
    )
}
