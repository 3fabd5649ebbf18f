use super::{CommandSpec, Completion, ProcessOutcome, Runner};
use std::io::Read;
use std::process::Child;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Spawns real child processes, one at a time.
#[derive(Clone, Copy, Debug)]
pub struct ProcessRunner {
    poll_interval: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl ProcessRunner {
    /// How often a bounded wait checks whether the child has exited.
    pub fn with_poll_interval(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    fn wait_bounded(&self, child: &mut Child, limit: Duration) -> ProcessOutcome {
        let start = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return status.into(),
                Ok(None) => {
                    let elapsed = start.elapsed();
                    if elapsed >= limit {
                        kill(child);
                        return ProcessOutcome::TimedOut { after: elapsed };
                    }
                    thread::sleep(self.poll_interval.min(limit - elapsed));
                }
                Err(e) => {
                    kill(child);
                    return ProcessOutcome::WaitError(e);
                }
            }
        }
    }
}

impl Runner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> ProcessOutcome {
        log::info!("$ {}", spec.command_line());
        match which::which(&spec.program) {
            Ok(path) => log::trace!("{} resolved to {}", spec.program, path.display()),
            Err(e) => log::debug!("{} not found on PATH: {e}", spec.program),
        }

        let mut child = match spec.to_command().spawn() {
            Ok(child) => child,
            Err(e) => return ProcessOutcome::SpawnError(e),
        };
        let stderr = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = pipe.read_to_end(&mut buf);
                String::from_utf8_lossy(&buf).into_owned()
            })
        });

        let outcome = match spec.completion {
            Completion::Bounded(limit) => self.wait_bounded(&mut child, limit),
            Completion::Unbounded => match child.wait() {
                Ok(status) => status.into(),
                Err(e) => {
                    log::error!("Waiting on {} failed: {e}", spec.program);
                    kill(&mut child);
                    ProcessOutcome::WaitError(e)
                }
            },
        };

        // A killed child may leave grandchildren holding the pipe open.
        if matches!(outcome, ProcessOutcome::TimedOut { .. }) {
            if stderr.is_some() {
                log::debug!("Discarding captured stderr of timed out {}", spec.program);
            }
        } else {
            echo_stderr(stderr);
        }
        outcome
    }
}

fn echo_stderr(reader: Option<JoinHandle<String>>) {
    let Some(reader) = reader else {
        return;
    };
    match reader.join() {
        Ok(text) if !text.is_empty() => eprint!("{text}"),
        Ok(_) => {}
        Err(_) => log::warn!("stderr reader thread panicked"),
    }
}

fn kill(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::warn!("Failed to kill pid {}: {e}", child.id());
    }
    if let Err(e) = child.wait() {
        log::debug!("Failed to reap pid {}: {e}", child.id());
    }
}
