//! Emulator launch for interactive debugging.

use super::{FailurePolicy, Sequence};
use crate::context::Context;
use crate::exec::Runner;
use crate::qemu::QemuBuilder;
use anyhow::Result;
use std::path::Path;

/// Boot `kernel` halted at reset with the gdb stub up and serial on this terminal.
pub fn run<R: Runner + ?Sized>(
    runner: &R,
    ctx: &Context,
    arch: &str,
    kernel: &Path,
    on_failure: FailurePolicy,
) -> Result<()> {
    let spec = QemuBuilder::new(arch, kernel).enable_gdb(true).build(ctx);

    log::info!("QEMU started");
    log::info!("Attach with: gdb -ex 'target remote :1234' {}", kernel.display());
    Sequence::new(runner, on_failure).step("launch", &spec)?;
    Ok(())
}

/// Selectable, but there is nothing to do yet.
pub fn start_target(kernel: &Path) -> Result<()> {
    log::warn!(
        "start_target is not implemented; nothing was started for {}",
        kernel.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{Completion, ProcessOutcome};
    use crate::tasks::test_support::Recorder;

    #[test]
    fn test_launch_spawns_qemu_once() {
        let ctx = Context::new("/src/sysrv", None);
        let recorder = Recorder::default();

        run(&recorder, &ctx, "riscv64", Path::new("kernel.elf"), FailurePolicy::Continue).unwrap();

        let specs = recorder.specs.borrow();
        assert_eq!(specs.len(), 1);
        assert_eq!(
            specs[0].command_line(),
            "qemu-system-riscv64 -machine virt -serial mon:stdio -S -s -kernel kernel.elf"
        );
        assert_eq!(specs[0].completion, Completion::Unbounded);
        assert_eq!(specs[0].env.len(), 1);
    }

    #[test]
    fn test_launch_failure_is_swallowed_by_default() {
        let ctx = Context::new("/src/sysrv", None);
        let recorder = Recorder::scripted([ProcessOutcome::Failed { code: Some(1) }]);
        assert!(run(&recorder, &ctx, "riscv64", Path::new("k"), FailurePolicy::Continue).is_ok());

        let recorder = Recorder::scripted([ProcessOutcome::Failed { code: Some(1) }]);
        assert!(run(&recorder, &ctx, "riscv64", Path::new("k"), FailurePolicy::Abort).is_err());
    }

    #[test]
    fn test_start_target_is_a_no_op() {
        assert!(start_target(Path::new("kernel.elf")).is_ok());
    }
}
