//! Integration tests for the drivers.
//!
//! Component: Runtime (runner, sinks, audit)

#![cfg(test)]

use crate::common::*;

use mycelium::audit::{self, AuditConfig, AuditFormat, Severity};
use mycelium::*;

#[test]
fn run_reports_halt() {
    // Arrange
    let program = grid("080041 0c0000");

    // Act
    let (out, report) = run(&program);

    // Assert
    assert_halted(&report);
    assert_eq!(out, "A");
    assert_eq!(report.cycles, 2);
}

#[test]
fn count_cycles_matches_run() {
    let program = grid("080003 0a0001 0c0002 080001 0a0002 0b0001 0a0001 030002 090000 040000");

    let counted = Runner::default().count_cycles(&program);
    let (_, report) = run(&program);

    assert_eq!(counted, Some(report.cycles));
}

#[test]
fn unbounded_config_has_no_cap() {
    assert_eq!(RunConfig::default(), RunConfig::unbounded());
    assert_eq!(RunConfig::default().max_cycles, None);
    assert_eq!(RunConfig::bounded(3).max_cycles, Some(3));
}

#[test]
fn zero_cap_takes_no_steps() {
    let report = Runner::new(RunConfig::bounded(0)).run(&grid("000000"), &mut NullSink);
    assert_eq!(report.status, RunStatus::CycleLimit);
    assert_eq!(report.cycles, 0);
}

#[test]
fn writer_sink_streams_output() {
    // Arrange
    let program = grid("080048 0c0000 080069 0c0000 08002a 0c0002");
    let mut sink = WriterSink::new(Vec::new());

    // Act
    Runner::default().run(&program, &mut sink);

    // Assert
    assert_eq!(sink.items_written(), 3);
    assert_eq!(sink.into_result().unwrap(), b"Hi42");
}

#[test]
fn output_items_keep_their_kind() {
    let program = grid("080041 0c0002 080041 0c0000");
    let mut items: Vec<OutputItem> = Vec::new();

    Runner::default().run(&program, &mut items);

    assert_eq!(items, vec![OutputItem::Int(65), OutputItem::Char('A')]);
}

#[test]
fn trace_snapshots_follow_the_pointer() {
    // Arrange
    let program = grid("010001 000000\n080001 000000\n");
    let mut ips = Vec::new();

    // Act
    let report = Runner::default().trace(&program, &mut NullSink, |snap| ips.push(snap.ip));

    // Assert
    assert_halted(&report);
    assert_eq!(ips, vec![(0, 1), (0, 2)]);
}

#[test]
fn audit_log_records_lifecycle_and_reserved_opcodes() {
    // Arrange: this is the only test in the binary that installs the global
    // logger. Other tests still log through it, so filter by label below.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.jsonl");
    let config = AuditConfig::to_file(&path)
        .with_format(AuditFormat::JsonLines)
        .with_min_severity(Severity::Debug);
    audit::init_global_logger(config).expect("global audit logger already installed");
    let program = grid("060000 050006 ffffff");

    // Act
    let report = Runner::default()
        .with_label("audit-lifecycle.myc")
        .run(&program, &mut NullSink);
    audit::global_logger().unwrap().flush().unwrap();

    // Assert
    assert_halted(&report);
    let log = std::fs::read_to_string(&path).unwrap();
    let entries: Vec<serde_json::Value> = log
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let actions_for = |id: &str| -> Vec<String> {
        entries
            .iter()
            .filter(|e| e["entity_id"] == id)
            .map(|e| e["action"].as_str().unwrap_or_default().to_string())
            .collect()
    };
    assert_eq!(actions_for("audit-lifecycle.myc"), vec!["RUN", "HALT"]);

    // Reserved family, unassigned memory subcode, reserved family.
    let noted: Vec<&str> = entries
        .iter()
        .filter(|e| e["action"] == "UNIMPLEMENTED")
        .filter_map(|e| e["entity_id"].as_str())
        .collect();
    for cell in ["(0, 0)", "(1, 0)", "(2, 0)"] {
        assert!(noted.contains(&cell), "no UNIMPLEMENTED entry for {}", cell);
    }
}
