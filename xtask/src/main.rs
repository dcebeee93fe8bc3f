// Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

mod cargo;
mod clippy;
mod header;
mod memory_map;
mod precheckin;

/// Bare-metal target of the Cortex-A9 application cores.
pub const TARGET: &str = "armv7a-none-eabi";

pub static PROJECT_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
});

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Xtask {
    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run clippy on all targets
    Clippy,
    /// Check that all files are formatted
    Format,
    /// Run pre-check-in checks
    Precheckin,
    /// Check cargo lock
    CargoLock,
    /// Check files for Apache license header
    HeaderCheck,
    /// Add Apache license header to files where it is missing
    HeaderFix,
    /// Run tests
    Test,
    /// Print the memory map of a board
    MemoryMap {
        /// Board to print. Default: stemmy
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() {
    let cli = Xtask::parse();
    let result = match &cli.xtask {
        Commands::Clippy => clippy::clippy(),
        Commands::Format => cargo::format(),
        Commands::Precheckin => precheckin::precheckin(),
        Commands::CargoLock => cargo::lock_check(),
        Commands::HeaderCheck => header::check(),
        Commands::HeaderFix => header::fix(),
        Commands::Test => test::test(),
        Commands::MemoryMap { platform } => memory_map::print(platform.as_deref()),
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
}
