//! Audit logger implementation.
//!
//! Thread-safe, line-oriented logging with:
//! - Buffered file I/O
//! - Severity-based filtering
//! - Text or JSON Lines output
//! - Optional echo to stderr, keeping stdout free for program output

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::entry::{AuditEntry, Outcome, Severity};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the audit logger.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Path to the audit log file. `None` logs nowhere but the echo.
    pub log_path: Option<PathBuf>,
    /// Minimum severity to log.
    pub min_severity: Severity,
    /// Whether to also print to stderr.
    pub echo_stderr: bool,
    /// Output format.
    pub format: AuditFormat,
}

/// Output format for audit logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditFormat {
    /// Structured text lines (default).
    Text,
    /// JSON Lines format.
    JsonLines,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            log_path: Some(PathBuf::from("mycelium-audit.log")),
            min_severity: Severity::Info,
            echo_stderr: false,
            format: AuditFormat::Text,
        }
    }
}

impl AuditConfig {
    /// Log to `path` at the default severity.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Echo to stderr only, no file.
    pub fn stderr_only() -> Self {
        Self {
            log_path: None,
            echo_stderr: true,
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: AuditFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }
}

// =============================================================================
// Audit Logger
// =============================================================================

/// Thread-safe audit logger with file-based persistence.
pub struct AuditLogger {
    config: AuditConfig,
    writer: Mutex<Option<BufWriter<File>>>,
    sequence: AtomicU64,
}

impl AuditLogger {
    /// Create a new audit logger with the given configuration.
    pub fn new(config: AuditConfig) -> std::io::Result<Self> {
        let writer = match &config.log_path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Some(BufWriter::new(file))
            }
            None => None,
        };

        Ok(Self {
            config,
            writer: Mutex::new(writer),
            sequence: AtomicU64::new(0),
        })
    }

    /// Whether entries of this severity pass the filter.
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.config.min_severity
    }

    /// Log an audit entry.
    pub fn log(&self, entry: AuditEntry) -> std::io::Result<()> {
        if !self.enabled(entry.severity) {
            return Ok(());
        }

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);

        let line = match self.config.format {
            AuditFormat::Text => format!("{:08} | {}\n", seq, entry.format_line()),
            AuditFormat::JsonLines => format!("{}\n", entry.to_json()),
        };

        if let Ok(mut guard) = self.writer.lock() {
            if let Some(ref mut w) = *guard {
                w.write_all(line.as_bytes())?;
                w.flush()?;
            }
        }

        if self.config.echo_stderr {
            eprint!("{}", line);
        }

        Ok(())
    }

    /// Create a quick warning entry and log it.
    pub fn warn(
        &self,
        action: &str,
        entity_type: &str,
        entity_id: &str,
        description: &str,
    ) -> std::io::Result<()> {
        self.log(
            AuditEntry::new(action, entity_type, entity_id, description)
                .with_severity(Severity::Warning),
        )
    }

    /// Create a quick error entry and log it.
    pub fn error(
        &self,
        action: &str,
        entity_type: &str,
        entity_id: &str,
        description: &str,
    ) -> std::io::Result<()> {
        self.log(
            AuditEntry::new(action, entity_type, entity_id, description)
                .with_severity(Severity::Error)
                .with_outcome(Outcome::Failure),
        )
    }

    /// Flush the log buffer.
    pub fn flush(&self) -> std::io::Result<()> {
        if let Ok(mut guard) = self.writer.lock() {
            if let Some(ref mut w) = *guard {
                w.flush()?;
            }
        }
        Ok(())
    }

    /// Number of entries written so far.
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Get configuration reference.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }
}

impl std::fmt::Debug for AuditLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogger")
            .field("config", &self.config)
            .field("sequence", &self.sequence())
            .finish()
    }
}
