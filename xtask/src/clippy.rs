// Licensed under the Apache-2.0 license

use crate::{cargo, TARGET};
use anyhow::Result;

pub(crate) fn clippy() -> Result<()> {
    println!("Running: cargo clippy");
    run_clippy(&["--workspace", "--all-targets"])?;

    // The firmware crates compile differently without `std`.
    println!("Running: cargo clippy --target {TARGET}");
    run_clippy(&[
        "--target",
        TARGET,
        "-p",
        "prcmu-driver",
        "-p",
        "ab8500-driver",
        "-p",
        "platform-stemmy",
    ])
}

fn run_clippy(extra: &[&str]) -> Result<()> {
    let mut args = vec!["clippy"];
    args.extend(extra);
    args.extend(["--", "-D", "warnings", "--no-deps"]);
    cargo::run(&args, "cargo clippy failed")
}
