//! Where a fragment comes from: a file, stdin, or the command line.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Maximum source size in bytes (1MB)
pub const MAX_SOURCE_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl Source {
    /// `--expr` wins; a missing path or `-` means stdin.
    pub fn from_args(file: Option<&str>, expr: Option<&str>) -> Self {
        match (expr, file) {
            (Some(text), _) => Source::Inline(text.to_string()),
            (None, None | Some("-")) => Source::Stdin,
            (None, Some(path)) => Source::File(PathBuf::from(path)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
            Source::Inline(_) => "<expr>".to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        let src = match self {
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?,
            Source::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
            Source::Inline(text) => text.clone(),
        };
        check_size(&src)?;
        Ok(src)
    }
}

pub fn check_size(src: &str) -> Result<()> {
    if src.len() > MAX_SOURCE_SIZE {
        bail!(
            "source exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(())
}
