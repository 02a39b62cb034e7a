//! Audit entry types and structures.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use serde_json::{json, Map, Value as Json};

use crate::core::Cell;

// =============================================================================
// Core Types
// =============================================================================

/// Severity level for audit entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    /// Per-instruction detail (unimplemented opcodes and similar).
    Debug = 0,
    /// Informational message (normal operation).
    Info = 1,
    /// Warning (potential issue, operation continued).
    Warning = 2,
    /// Error (operation failed).
    Error = 3,
}

impl Severity {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Some(Severity::Debug),
            "INFO" | "INFORMATION" => Some(Severity::Info),
            "WARN" | "WARNING" => Some(Severity::Warning),
            "ERROR" | "ERR" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of an audited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Outcome {
    /// Operation completed successfully.
    Success = 0,
    /// Operation failed.
    Failure = 1,
    /// Operation stopped before finishing (e.g. cycle cap).
    Partial = 2,
}

impl Outcome {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Failure => "FAILURE",
            Outcome::Partial => "PARTIAL",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of audited action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    /// Reading or writing program files.
    Load,
    /// Program execution.
    Execute,
    /// Grid editing.
    Edit,
    /// Configuration changes.
    Config,
    /// System-level events.
    System,
    /// Custom category.
    Custom(String),
}

impl ActionCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ActionCategory::Load => "LOAD",
            ActionCategory::Execute => "EXECUTE",
            ActionCategory::Edit => "EDIT",
            ActionCategory::Config => "CONFIG",
            ActionCategory::System => "SYSTEM",
            ActionCategory::Custom(s) => s,
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Audit Entry
// =============================================================================

/// An immutable audit log entry.
///
/// Captures WHAT happened to WHICH entity, WHEN, and with what OUTCOME.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    /// Unique identifier for this entry.
    pub id: u64,
    /// UTC timestamp (milliseconds since epoch).
    pub timestamp_ms: u64,
    /// Action performed (e.g., "LOAD", "RUN", "HALT").
    pub action: String,
    /// Category of the action.
    pub category: ActionCategory,
    /// Type of entity involved (e.g., "Program", "Machine", "Cell").
    pub entity_type: String,
    /// Identifier of the entity (e.g., filename, coordinates).
    pub entity_id: String,
    /// Human-readable description.
    pub description: String,
    /// Severity level.
    pub severity: Severity,
    /// Outcome of the operation.
    pub outcome: Outcome,
    /// Duration in microseconds (if applicable).
    pub duration_us: Option<u64>,
    /// Additional structured data, sorted by key.
    pub metadata: BTreeMap<String, String>,
}

impl AuditEntry {
    /// Create a new audit entry with required fields.
    pub fn new(
        action: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            id: COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst),
            timestamp_ms,
            action: action.into(),
            category: ActionCategory::System,
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
            description: description.into(),
            severity: Severity::Info,
            outcome: Outcome::Success,
            duration_us: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Set the action category.
    pub fn with_category(mut self, category: ActionCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the outcome.
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Set the duration in microseconds.
    pub fn with_duration_us(mut self, us: u64) -> Self {
        self.duration_us = Some(us);
        self
    }

    /// Add metadata key-value pair.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    // -------------------------------------------------------------------------
    // Domain constructors
    // -------------------------------------------------------------------------

    /// A run is about to start on a `width x height` program.
    pub fn run_started(program: &str, width: usize, height: usize) -> Self {
        AuditEntry::new("RUN", "Program", program, "Run started")
            .with_category(ActionCategory::Execute)
            .with_meta("width", width.to_string())
            .with_meta("height", height.to_string())
    }

    /// The instruction pointer left the grid.
    pub fn halted(program: &str, cycles: u64, ip: (i32, i32)) -> Self {
        AuditEntry::new("HALT", "Program", program, "Instruction pointer left the grid")
            .with_category(ActionCategory::Execute)
            .with_meta("cycles", cycles.to_string())
            .with_meta("ip", format!("({}, {})", ip.0, ip.1))
    }

    /// A cell with no defined behavior was executed as a no-op.
    pub fn unimplemented_opcode(x: i32, y: i32, cell: Cell, description: &str) -> Self {
        AuditEntry::new(
            "UNIMPLEMENTED",
            "Cell",
            format!("({}, {})", x, y),
            format!("{} executed as no-op", description),
        )
        .with_category(ActionCategory::Execute)
        .with_severity(Severity::Debug)
        .with_meta("rgb", format!("{},{},{}", cell.r, cell.g, cell.b))
    }

    /// Format timestamp as ISO 8601.
    pub fn timestamp_iso(&self) -> String {
        let secs = self.timestamp_ms / 1000;
        let ms = self.timestamp_ms % 1000;

        // Simple UTC formatting (no chrono dependency)
        let days_since_epoch = secs / 86400;
        let time_of_day = secs % 86400;

        let hours = time_of_day / 3600;
        let minutes = (time_of_day % 3600) / 60;
        let seconds = time_of_day % 60;

        let is_leap = |year: u32| year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);

        let mut year = 1970u32;
        let mut remaining_days = days_since_epoch;
        loop {
            let days_in_year = if is_leap(year) { 366 } else { 365 };
            if remaining_days < days_in_year {
                break;
            }
            remaining_days -= days_in_year;
            year += 1;
        }

        let february = if is_leap(year) { 29 } else { 28 };
        let days_in_months: [u64; 12] = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

        let mut month = 1u32;
        for days in days_in_months.iter() {
            if remaining_days < *days {
                break;
            }
            remaining_days -= *days;
            month += 1;
        }

        let day = remaining_days + 1;

        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year, month, day, hours, minutes, seconds, ms
        )
    }

    /// Format as a single structured log line.
    ///
    /// Format: `TIMESTAMP | SEVERITY | CATEGORY | ACTION | ENTITY | OUTCOME | DESCRIPTION [metadata]`
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "{} | {:5} | {:8} | {:14} | {}:{} | {:8} | {}",
            self.timestamp_iso(),
            self.severity.as_str(),
            self.category.as_str(),
            self.action,
            self.entity_type,
            self.entity_id,
            self.outcome.as_str(),
            self.description,
        );

        if let Some(us) = self.duration_us {
            if us >= 1_000_000 {
                line.push_str(&format!(" [{:.2}s]", us as f64 / 1_000_000.0));
            } else if us >= 1_000 {
                line.push_str(&format!(" [{:.2}ms]", us as f64 / 1_000.0));
            } else {
                line.push_str(&format!(" [{}us]", us));
            }
        }

        if !self.metadata.is_empty() {
            let meta: Vec<String> = self
                .metadata
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            line.push_str(&format!(" {{{}}}", meta.join(", ")));
        }

        line
    }

    /// Build the JSON object for this entry.
    pub fn to_json_value(&self) -> Json {
        let mut json = json!({
            "id": self.id,
            "timestamp": self.timestamp_iso(),
            "severity": self.severity.as_str(),
            "category": self.category.as_str(),
            "action": self.action,
            "entity_type": self.entity_type,
            "entity_id": self.entity_id,
            "outcome": self.outcome.as_str(),
            "description": self.description,
        });

        if let Some(object) = json.as_object_mut() {
            if let Some(us) = self.duration_us {
                object.insert("duration_us".to_string(), json!(us));
            }
            if !self.metadata.is_empty() {
                let meta: Map<String, Json> = self
                    .metadata
                    .iter()
                    .map(|(k, v)| (k.clone(), Json::String(v.clone())))
                    .collect();
                object.insert("metadata".to_string(), Json::Object(meta));
            }
        }
        json
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
