use crate::cli::{BuildRequest, BuildTarget, RunRequest, RunType};
use crate::context::Context;
use crate::exec::{ProcessRunner, Runner};
use anyhow::Result;

/// Entry point for `sysrv-build`.
pub fn build(req: BuildRequest) -> Result<()> {
    let ctx = Context::from_current_dir(Some(req.kernel_arch.clone()))?;
    dispatch_build(&ProcessRunner::default(), &ctx, &req)
}

/// Entry point for `sysrv-run`.
pub fn run(req: RunRequest) -> Result<()> {
    let ctx = Context::from_current_dir(None)?;
    dispatch_run(&ProcessRunner::default(), &ctx, &req)
}

pub fn dispatch_build<R: Runner + ?Sized>(
    runner: &R,
    ctx: &Context,
    req: &BuildRequest,
) -> Result<()> {
    log::debug!("Build root: {}", ctx.root().display());
    match req.target {
        BuildTarget::Build => crate::tasks::build::run(runner, ctx, &req.options),
        BuildTarget::Clean => crate::tasks::clean::run(runner, ctx, &req.options),
    }
}

pub fn dispatch_run<R: Runner + ?Sized>(runner: &R, ctx: &Context, req: &RunRequest) -> Result<()> {
    log::debug!("Build root: {}", ctx.root().display());
    match req.run_type {
        RunType::Launch => crate::tasks::launch::run(
            runner,
            ctx,
            &req.kernel_arch,
            &req.kernel_path,
            req.on_failure,
        ),
        RunType::StartTarget => crate::tasks::launch::start_target(&req.kernel_path),
    }
}
