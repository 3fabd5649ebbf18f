//! Subprocess execution
//!
//! Every external tool goes through one [`CommandSpec`] and one [`Runner`].
//! A `CommandSpec` says what to run and how to wait for it. The runner
//! reports how it ended as a [`ProcessOutcome`] and leaves the decision to
//! the caller.

mod runner;

pub use runner::ProcessRunner;

use crate::context::Context;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

/// How long to wait for a child before giving up on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Kill the child once the budget is spent.
    Bounded(Duration),
    /// Wait for the child to exit on its own.
    Unbounded,
}

/// Stdio wiring for a child. Stdin and stdout always stay on the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StdioPolicy {
    /// Stderr goes straight to the terminal as well.
    #[default]
    Inherit,
    /// Stderr is collected and echoed once the child is done.
    ///
    /// Meant for [`Completion::Unbounded`]: when a bounded wait times out the
    /// collected text is dropped, since the pipe may never reach EOF.
    CaptureStderr,
}

/// One external command, fully described before it is spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
    pub env: Vec<(String, OsString)>,
    pub completion: Completion,
    pub stdio: StdioPolicy,
}

impl CommandSpec {
    /// A command rooted at the invocation's build root, carrying its environment.
    pub fn new(program: impl Into<String>, ctx: &Context) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: ctx.root().to_path_buf(),
            env: crate::util::tools_env::child_env(ctx),
            completion: Completion::Unbounded,
            stdio: StdioPolicy::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    pub fn completion(mut self, completion: Completion) -> Self {
        self.completion = completion;
        self
    }

    pub fn stdio(mut self, stdio: StdioPolicy) -> Self {
        self.stdio = stdio;
        self
    }

    /// Arguments as UTF-8, lossily.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Printable command line.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in self.arg_strings() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    pub(crate) fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.current_dir)
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_os_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit());
        match self.stdio {
            StdioPolicy::Inherit => cmd.stderr(Stdio::inherit()),
            StdioPolicy::CaptureStderr => cmd.stderr(Stdio::piped()),
        };
        cmd
    }
}

/// How a spawned command ended.
#[derive(Debug)]
pub enum ProcessOutcome {
    Success,
    /// Non-zero exit; `code` is `None` when the child died to a signal.
    Failed { code: Option<i32> },
    /// Killed after exceeding its bounded wait.
    TimedOut { after: Duration },
    /// The program could not be started at all.
    SpawnError(io::Error),
    /// Waiting on the child failed; the child was killed.
    WaitError(io::Error),
}

impl ProcessOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<ExitStatus> for ProcessOutcome {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            Self::Success
        } else {
            Self::Failed {
                code: status.code(),
            }
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "succeeded"),
            Self::Failed { code: Some(code) } => write!(f, "exited with status {code}"),
            Self::Failed { code: None } => write!(f, "was terminated by a signal"),
            Self::TimedOut { after } => write!(f, "timed out after {:.1}s", after.as_secs_f64()),
            Self::SpawnError(e) => write!(f, "could not be started: {e}"),
            Self::WaitError(e) => write!(f, "failed while waiting: {e}"),
        }
    }
}

/// Something that can execute a [`CommandSpec`].
pub trait Runner {
    fn run(&self, spec: &CommandSpec) -> ProcessOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::new("/src/sysrv", Some("rv64".to_string()))
    }

    #[test]
    fn test_spec_inherits_context() {
        let spec = CommandSpec::new("ninja", &ctx());
        assert_eq!(spec.current_dir, PathBuf::from("/src/sysrv"));
        assert_eq!(spec.env.len(), 2);
        assert_eq!(spec.completion, Completion::Unbounded);
        assert_eq!(spec.stdio, StdioPolicy::Inherit);
    }

    #[test]
    fn test_command_line_joins_args() {
        let spec = CommandSpec::new("ninja", &ctx()).args(["-C", "build"]).arg("clean");
        assert_eq!(spec.command_line(), "ninja -C build clean");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ProcessOutcome::Failed { code: Some(2) }.to_string(), "exited with status 2");
        assert_eq!(
            ProcessOutcome::TimedOut {
                after: Duration::from_secs(30)
            }
            .to_string(),
            "timed out after 30.0s"
        );
        assert!(ProcessOutcome::Success.is_success());
        assert!(!ProcessOutcome::Failed { code: None }.is_success());
    }
}
