//! Operator-facing record of swallowed failures.
//!
//! DESIGN
//! ======
//! Storage and network failures never reach the user beyond the fallback
//! reply. Operators see them on the `log` channel: every recorded failure is
//! emitted once at `warn` as its [`Diagnostic`] line, which `start()` routes
//! to the browser console. The buffer keeps the most recent entries for code
//! holding the `ChatState` and is bounded so a long-lived page does not grow
//! without limit.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use std::fmt;

use crate::error::ChatError;

/// Maximum number of diagnostics retained.
pub const DIAGNOSTICS_CAP: usize = 50;

/// Operation that produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticSource {
    /// The `POST /api/ai/chat` exchange.
    Chat,
    HistoryLoad,
    HistorySave,
}

impl fmt::Display for DiagnosticSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chat => "chat",
            Self::HistoryLoad => "history load",
            Self::HistorySave => "history save",
        })
    }
}

/// One recorded failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub source: DiagnosticSource,
    pub error: ChatError,
    /// RFC 3339 time the failure was recorded.
    pub timestamp: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chat widget {} failed at {}: {}", self.source, self.timestamp, self.error)
    }
}

/// Bounded, oldest-first buffer of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Log `error` and append it, evicting the oldest entry at the cap.
    pub fn record(&mut self, source: DiagnosticSource, error: ChatError, timestamp: String) {
        let diagnostic = Diagnostic { source, error, timestamp };
        log::warn!("{diagnostic}");
        if self.entries.len() >= DIAGNOSTICS_CAP {
            self.entries.remove(0);
        }
        self.entries.push(diagnostic);
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn last(&self) -> Option<&Diagnostic> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of entries from `source`.
    #[must_use]
    pub fn count(&self, source: DiagnosticSource) -> usize {
        self.entries.iter().filter(|d| d.source == source).count()
    }
}
