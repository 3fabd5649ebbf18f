//! # System-RV tooling
//!
//! Two small front ends over one subprocess layer:
//!
//! ```bash
//! sysrv-build build -a rv64          # cmake configure + ninja into build/
//! sysrv-build clean                  # ninja clean + remove build/
//! sysrv-run launch build/kernel.elf  # QEMU halted at reset, gdb stub on :1234
//! ```
//!
//! Commands run from the directory the tool was invoked in. Child failures
//! are logged and the sequence carries on unless `--fail-fast` is given.

pub mod app;
pub mod cli;
pub mod context;
pub mod error;
pub mod exec;
pub mod logging;
pub mod qemu;
pub mod tasks;
pub mod util;
