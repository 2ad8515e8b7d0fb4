//! Classify a finished tool run.

/// Result of running one external tool on one URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolOutcome {
    /// Exit code; None if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured stderr (also echoed to the terminal while running).
    pub stderr: String,
}

impl ToolOutcome {
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// High-level classification of a tool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Exit code 0.
    Success,
    /// Non-zero exit and stderr matched a fallback signature (e.g. image-only post).
    NoVideo,
    /// Any other non-zero exit.
    Failed(i32),
    /// Terminated without an exit code.
    Killed,
}

/// True if `stderr` contains any of `signatures` (case-insensitive).
pub fn matches_signature(stderr: &str, signatures: &[String]) -> bool {
    let haystack = stderr.to_lowercase();
    signatures
        .iter()
        .filter(|s| !s.is_empty())
        .any(|s| haystack.contains(&s.to_lowercase()))
}

/// Classify a tool outcome against the configured fallback signatures.
pub fn classify(outcome: &ToolOutcome, signatures: &[String]) -> OutcomeKind {
    match outcome.exit_code {
        Some(0) => OutcomeKind::Success,
        Some(_) if matches_signature(&outcome.stderr, signatures) => OutcomeKind::NoVideo,
        Some(code) => OutcomeKind::Failed(code),
        None => OutcomeKind::Killed,
    }
}
