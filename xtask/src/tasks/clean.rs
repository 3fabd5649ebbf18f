//! Clean build outputs and remove the build directory.

use super::{BuildOptions, Sequence};
use crate::context::Context;
use crate::exec::{CommandSpec, Completion, Runner};
use crate::util::repo::{self, BUILD_DIRECTORY};
use anyhow::{Context as _, Result};
use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

pub fn run<R: Runner + ?Sized>(runner: &R, ctx: &Context, opts: &BuildOptions) -> Result<()> {
    log::info!("Cleaning {}", repo::build_dir(ctx.root()).display());
    let seq = Sequence::new(runner, opts.on_failure);
    // Removal happens even when a step aborts; the first step error is reported after.
    let cleaned = seq.step("clean", &clean_command(ctx, opts.timeout));
    let removed = seq.step("remove", &remove_command(ctx, opts.timeout));

    // `rm` may be missing or may have been killed.
    let build_dir = repo::build_dir(ctx.root());
    match fs::remove_dir_all(&build_dir) {
        Ok(()) => log::debug!("Removed leftover {}", build_dir.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e).with_context(|| format!("Removing {}", build_dir.display())),
    }
    cleaned?;
    removed?;
    Ok(())
}

/// `ninja -C build clean`
pub fn clean_command(ctx: &Context, timeout: Duration) -> CommandSpec {
    CommandSpec::new("ninja", ctx)
        .args(["-C", BUILD_DIRECTORY, "clean"])
        .completion(Completion::Bounded(timeout))
}

/// `rm -rf ./build`
pub fn remove_command(ctx: &Context, timeout: Duration) -> CommandSpec {
    CommandSpec::new("rm", ctx)
        .arg("-rf")
        .arg(format!("./{BUILD_DIRECTORY}"))
        .completion(Completion::Bounded(timeout))
}
