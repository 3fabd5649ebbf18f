use crate::tasks::{BuildOptions, FailurePolicy};
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Architecture the build tool targets when `-a` is omitted.
pub const DEFAULT_BUILD_ARCH: &str = "rv64";

/// Architecture the run tool emulates when `-a` is omitted.
pub const DEFAULT_RUN_ARCH: &str = "riscv64";

/// Bounded-wait budget for each build-path command, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BuildTarget {
    /// Configure with cmake and compile with ninja
    Build,
    /// Clean with ninja and remove the build directory
    Clean,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RunType {
    /// Boot the kernel in QEMU, halted, with the gdb stub enabled
    Launch,
    /// Reserved; currently does nothing
    #[value(name = "start_target")]
    StartTarget,
}

#[derive(Debug, Parser)]
#[command(name = "sysrv-build")]
#[command(about = "System-RV build script")]
pub struct BuildCli {
    /// Possible build targets
    #[arg(value_enum)]
    pub target: BuildTarget,

    /// Kernel architecture (selects meta/cmake/<ARCH>.cmake)
    #[arg(
        short = 'a',
        long = "kernel-arch",
        value_name = "ARCH",
        default_value = DEFAULT_BUILD_ARCH,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub kernel_arch: String,

    /// Seconds to wait for each cmake/ninja/rm step before killing it
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Stop at the first step that does not succeed and exit non-zero
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Parser)]
#[command(name = "sysrv-run")]
#[command(about = "System-RV QEMU run script")]
pub struct RunCli {
    /// Possible run types
    #[arg(value_enum)]
    pub run_type: RunType,

    /// Path to the Kernel image to run
    pub kernel_path: PathBuf,

    /// Kernel architecture (selects qemu-system-<ARCH>)
    #[arg(
        short = 'a',
        long = "kernel-arch",
        value_name = "ARCH",
        default_value = DEFAULT_RUN_ARCH,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub kernel_arch: String,

    /// Exit non-zero when QEMU does not exit cleanly
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// A parsed and validated build-tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildRequest {
    pub target: BuildTarget,
    pub kernel_arch: String,
    pub options: BuildOptions,
}

/// A parsed and validated run-tool invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRequest {
    pub run_type: RunType,
    pub kernel_path: PathBuf,
    pub kernel_arch: String,
    pub on_failure: FailurePolicy,
}

impl BuildCli {
    pub fn into_request(self) -> BuildRequest {
        BuildRequest {
            target: self.target,
            kernel_arch: self.kernel_arch,
            options: BuildOptions {
                timeout: Duration::from_secs(self.timeout),
                on_failure: FailurePolicy::from_fail_fast(self.fail_fast),
            },
        }
    }
}

impl RunCli {
    pub fn into_request(self) -> RunRequest {
        RunRequest {
            run_type: self.run_type,
            kernel_path: self.kernel_path,
            kernel_arch: self.kernel_arch,
            on_failure: FailurePolicy::from_fail_fast(self.fail_fast),
        }
    }
}
