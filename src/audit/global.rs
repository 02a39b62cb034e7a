//! Global audit logger singleton.

use std::sync::OnceLock;
use super::entry::{AuditEntry, Severity};
use super::logger::{AuditLogger, AuditConfig};

static GLOBAL_LOGGER: OnceLock<AuditLogger> = OnceLock::new();

/// Initialize the global audit logger.
pub fn init_global_logger(config: AuditConfig) -> std::io::Result<()> {
    let logger = AuditLogger::new(config)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::AlreadyExists, "Logger already initialized"))
}

/// Get a reference to the global logger (if initialized).
pub fn global_logger() -> Option<&'static AuditLogger> {
    GLOBAL_LOGGER.get()
}

/// Whether an entry of `severity` would be recorded.
///
/// Lets hot paths skip building entries when nobody is listening.
#[inline]
pub fn audit_enabled(severity: Severity) -> bool {
    global_logger().map_or(false, |logger| logger.enabled(severity))
}

/// Log to the global logger (no-op if not initialized).
pub fn audit(entry: AuditEntry) {
    if let Some(logger) = global_logger() {
        let _ = logger.log(entry);
    }
}

/// Quick warning log to global logger.
pub fn audit_warn(action: &str, entity_type: &str, entity_id: &str, description: &str) {
    if let Some(logger) = global_logger() {
        let _ = logger.warn(action, entity_type, entity_id, description);
    }
}

/// Quick error log to global logger.
pub fn audit_error(action: &str, entity_type: &str, entity_id: &str, description: &str) {
    if let Some(logger) = global_logger() {
        let _ = logger.error(action, entity_type, entity_id, description);
    }
}
