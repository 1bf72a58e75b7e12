// Subprocess runner
//
// Builds and executes the external-program invocations. Execution sits
// behind a trait so tests can record invocation sequences instead of
// spawning real processes.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info};

/// A single external-program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a `--flag value` pair
    pub fn flag(mut self, flag: &str, value: impl fmt::Display) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit outcome of a completed invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    code: i32,
}

impl RunOutcome {
    pub fn success() -> Self {
        Self { code: 0 }
    }

    pub fn from_code(code: i32) -> Self {
        Self { code }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs invocations one at a time, blocking until the child exits
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutcome, RunnerError>;
}

/// Production runner over `std::process::Command`
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutcome, RunnerError> {
        info!(program = %invocation.program.display(), "Running: {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| RunnerError::Spawn {
                program: invocation.program.display().to_string(),
                source,
            })?;

        let outcome = RunOutcome::from_code(exit_code(&status));
        debug!(code = outcome.code(), "Child exited");
        Ok(outcome)
    }
}

/// Map an `ExitStatus` to a shell-convention exit code
fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    // No code means the child was killed by a signal
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Logs invocations without executing anything
pub struct DryRunner;

impl CommandRunner for DryRunner {
    fn run(&self, invocation: &Invocation) -> Result<RunOutcome, RunnerError> {
        info!("[dry-run] {}", invocation);
        Ok(RunOutcome::success())
    }
}
