//! QEMU command builder
//!
//! Composes the emulator invocation for a debug-halted launch.

use crate::context::Context;
use crate::exec::{CommandSpec, Completion, StdioPolicy};
use std::path::{Path, PathBuf};

/// Machine profile used for every launch.
const MACHINE: &str = "virt";

/// Returns the QEMU binary name for this architecture
pub fn qemu_binary(arch: &str) -> String {
    format!("qemu-system-{arch}")
}

/// QEMU command builder with fluent API
#[derive(Clone, Debug)]
pub struct QemuBuilder {
    arch: String,
    kernel: PathBuf,
    serial_stdio: bool,
    enable_gdb: bool,
    gdb_wait: bool,
}

impl QemuBuilder {
    /// Create a new builder booting `kernel` on the given architecture.
    pub fn new(arch: &str, kernel: &Path) -> Self {
        Self {
            arch: arch.to_string(),
            kernel: kernel.to_path_buf(),
            serial_stdio: true,
            enable_gdb: false,
            gdb_wait: false,
        }
    }

    /// Multiplex the serial port and monitor onto the terminal
    pub fn serial_stdio(mut self, enabled: bool) -> Self {
        self.serial_stdio = enabled;
        self
    }

    /// Enable GDB server on port 1234, optionally holding the CPU at reset
    pub fn enable_gdb(mut self, wait: bool) -> Self {
        self.enable_gdb = true;
        self.gdb_wait = wait;
        self
    }

    /// Build the QEMU command. Runs interactively until QEMU exits.
    pub fn build(self, ctx: &Context) -> CommandSpec {
        let mut spec = CommandSpec::new(qemu_binary(&self.arch), ctx)
            .args(["-machine", MACHINE])
            .completion(Completion::Unbounded)
            .stdio(StdioPolicy::CaptureStderr);

        if self.serial_stdio {
            spec = spec.args(["-serial", "mon:stdio"]);
        }

        if self.enable_gdb {
            if self.gdb_wait {
                spec = spec.arg("-S"); // Freeze CPU at startup
            }
            spec = spec.arg("-s"); // Shorthand for -gdb tcp::1234
        }

        spec.arg("-kernel").arg(&self.kernel)
    }
}
