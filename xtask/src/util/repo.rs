use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Build output directory, relative to the build root.
pub const BUILD_DIRECTORY: &str = "build";

/// Directory holding the per-architecture CMake toolchain files.
pub const TOOLCHAIN_DIRECTORY: &str = "meta/cmake";

/// The build root is wherever the tool was invoked from.
pub fn build_root() -> Result<PathBuf> {
    env::current_dir().context("Reading the current working directory")
}

pub fn build_dir(root: &Path) -> PathBuf {
    root.join(BUILD_DIRECTORY)
}

/// Toolchain file path as handed to cmake (relative to the build root).
pub fn toolchain_file(arch: &str) -> String {
    format!("{TOOLCHAIN_DIRECTORY}/{arch}.cmake")
}
