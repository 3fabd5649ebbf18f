//! Configure + compile into the build directory.

use super::{BuildOptions, Sequence};
use crate::context::Context;
use crate::exec::{CommandSpec, Completion, Runner};
use crate::util::repo::{self, BUILD_DIRECTORY};
use anyhow::{Context as _, Result};
use std::fs;
use std::time::Duration;

pub fn run<R: Runner + ?Sized>(runner: &R, ctx: &Context, opts: &BuildOptions) -> Result<()> {
    let arch = ctx
        .arch()
        .context("No kernel architecture bound to this invocation")?;

    let build_dir = repo::build_dir(ctx.root());
    fs::create_dir_all(&build_dir)
        .with_context(|| format!("Creating {}", build_dir.display()))?;

    log::info!("Building System-RV for {arch}");
    let seq = Sequence::new(runner, opts.on_failure);
    seq.step("configure", &configure_command(ctx, arch, opts.timeout))?;
    seq.step("compile", &compile_command(ctx, opts.timeout))?;
    Ok(())
}

/// `cmake -DCMAKE_TOOLCHAIN_FILE=meta/cmake/<arch>.cmake -B build`
pub fn configure_command(ctx: &Context, arch: &str, timeout: Duration) -> CommandSpec {
    CommandSpec::new("cmake", ctx)
        .arg(format!("-DCMAKE_TOOLCHAIN_FILE={}", repo::toolchain_file(arch)))
        .args(["-B", BUILD_DIRECTORY])
        .completion(Completion::Bounded(timeout))
}

/// `ninja -C build`
pub fn compile_command(ctx: &Context, timeout: Duration) -> CommandSpec {
    CommandSpec::new("ninja", ctx)
        .args(["-C", BUILD_DIRECTORY])
        .completion(Completion::Bounded(timeout))
}
