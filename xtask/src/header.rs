// Licensed under the Apache-2.0 license

//! License header check for the Rust sources and manifests.

use crate::PROJECT_ROOT;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const HEADER: &str = "Licensed under the Apache-2.0 license";
/// The header has to appear within this many lines.
const HEADER_LINES: usize = 3;
// `examples` holds third-party trees under their own licenses.
const SKIPPED_DIRS: &[&str] = &[".git", "examples", "target"];

fn comment_leader(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "rs" => Some("//"),
        "toml" => Some("#"),
        _ => None,
    }
}

fn has_header(contents: &str) -> bool {
    contents
        .lines()
        .take(HEADER_LINES)
        .any(|line| line.contains(HEADER))
}

fn with_header(leader: &str, contents: &str) -> String {
    let gap = if contents.starts_with('\n') { "" } else { "\n" };
    format!("{leader} {HEADER}\n{gap}{contents}")
}

fn descend(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    let skipped = SKIPPED_DIRS.iter().any(|dir| name == *dir);
    !(entry.file_type().is_dir() && skipped)
}

fn relative(path: &Path) -> &Path {
    path.strip_prefix(&*PROJECT_ROOT).unwrap_or(path)
}

fn sources(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in WalkDir::new(root).into_iter().filter_entry(descend) {
        let entry = entry?;
        if entry.file_type().is_file() && comment_leader(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn missing_header() -> Result<Vec<PathBuf>> {
    let mut missing = vec![];
    for path in sources(&PROJECT_ROOT)? {
        let contents = fs::read_to_string(&path)
            .with_context(|| relative(&path).display().to_string())?;
        if !has_header(&contents) {
            missing.push(path);
        }
    }
    Ok(missing)
}

pub(crate) fn check() -> Result<()> {
    println!("Running: license header check");
    let missing = missing_header()?;
    for path in &missing {
        println!("{} has no license header", relative(path).display());
    }
    if !missing.is_empty() {
        bail!(
            "{} files without a license header; run \"cargo xtask header-fix\"",
            missing.len()
        );
    }
    Ok(())
}

pub(crate) fn fix() -> Result<()> {
    println!("Running: license header fix");
    for path in missing_header()? {
        let Some(leader) = comment_leader(&path) else {
            continue;
        };
        println!("Fixing header in {}", relative(&path).display());
        let contents = fs::read_to_string(&path)?;
        fs::write(&path, with_header(leader, &contents))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_header_in_first_lines() {
        let third = "[package]\n\n# Licensed under the Apache-2.0 license\n";
        let fourth = "fn main() {}\n\n\n// Licensed under the Apache-2.0 license\n";
        assert!(has_header("// Licensed under the Apache-2.0 license\n"));
        assert!(has_header(third));
        assert!(!has_header(fourth));
        assert!(!has_header(""));
    }

    #[test]
    fn test_fixed_file_passes() {
        let fixed = with_header("#", "[package]\nname = \"xtask\"\n");
        assert_eq!(
            fixed,
            "# Licensed under the Apache-2.0 license\n\n[package]\nname = \"xtask\"\n"
        );
        assert!(has_header(&fixed));
        assert_eq!(
            with_header("//", "\nfn main() {}\n"),
            "// Licensed under the Apache-2.0 license\n\nfn main() {}\n"
        );
    }

    #[test]
    fn test_only_rust_and_toml() {
        assert_eq!(comment_leader(Path::new("src/lib.rs")), Some("//"));
        assert_eq!(comment_leader(Path::new("Cargo.toml")), Some("#"));
        assert_eq!(comment_leader(Path::new("Cargo.lock")), None);
        assert_eq!(comment_leader(Path::new("DESIGN.md")), None);
    }

    #[test]
    fn test_workspace_sources() {
        let files = sources(&PROJECT_ROOT).unwrap();
        assert!(files.iter().any(|p| p.ends_with("xtask/src/header.rs")));
        assert!(files.iter().any(|p| p.ends_with("xtask/Cargo.toml")));
        assert!(!files.iter().any(|p| relative(p).starts_with("examples")));
    }
}
