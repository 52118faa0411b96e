//! Pipeline phase reporting.
//!
//! Long steps (document extraction, the remote summary call) announce
//! themselves on **stderr** so stdout remains parseable for scripts.

use std::io::Write;

/// Observable long-running phase of a summarize run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PipelinePhase {
    /// Pulling text out of an uploaded document.
    Extracting,
    /// Waiting on the hosted model.
    Summarizing,
}

impl PipelinePhase {
    fn message(&self) -> &'static str {
        match self {
            PipelinePhase::Extracting => "extracting text from document...",
            PipelinePhase::Summarizing => "creating summary...",
        }
    }
}

/// Reports phase transitions. Implementations write to stderr.
pub trait PhaseReporter: Send + Sync {
    fn report(&self, phase: PipelinePhase);
}

/// Human-friendly phase lines on stderr.
pub struct StderrProgress;

impl PhaseReporter for StderrProgress {
    fn report(&self, phase: PipelinePhase) {
        let _ = writeln!(std::io::stderr().lock(), "{}", phase.message());
        let _ = std::io::stderr().lock().flush();
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl PhaseReporter for NoProgress {
    fn report(&self, _phase: PipelinePhase) {}
}

/// Progress mode for the CLI: off or human (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressMode {
    Off,
    Human,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    /// Build a reporter for this mode.
    pub fn reporter(&self) -> Box<dyn PhaseReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
        }
    }
}
