//! Per-invocation state shared by every spawned command.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Build root and (optionally) the kernel architecture for one invocation.
///
/// Captured once at startup and passed by reference from there on; nothing
/// downstream reads the working directory or the process environment again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    root: PathBuf,
    arch: Option<String>,
}

impl Context {
    pub fn new(root: impl Into<PathBuf>, arch: Option<String>) -> Self {
        Self {
            root: root.into(),
            arch,
        }
    }

    /// Bind the invocation to the current working directory.
    pub fn from_current_dir(arch: Option<String>) -> Result<Self> {
        if arch.as_deref().is_some_and(str::is_empty) {
            bail!("Kernel architecture must not be empty");
        }
        Ok(Self::new(crate::util::repo::build_root()?, arch))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn arch(&self) -> Option<&str> {
        self.arch.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_current_dir_uses_cwd() {
        let ctx = Context::from_current_dir(Some("rv64".to_string())).unwrap();
        assert_eq!(ctx.root(), std::env::current_dir().unwrap());
        assert_eq!(ctx.arch(), Some("rv64"));
    }

    #[test]
    fn test_empty_arch_rejected() {
        assert!(Context::from_current_dir(Some(String::new())).is_err());
    }
}
