//! Integration tests for demo programs, program files and the CLI.
//!
//! Component: Parser, Tooling, CLI

#![cfg(test)]

use std::process::Command;

use crate::common::*;

use mycelium::tooling::listing;
use mycelium::*;

const HELLO: &str = include_str!("../../demos/hello.myc");
const COUNTDOWN: &str = include_str!("../../demos/countdown.myc");
const SUBROUTINE: &str = include_str!("../../demos/subroutine.myc");

mod demos {
    use super::*;

    #[test]
    fn hello() {
        assert_eq!(output_of(HELLO), "Hello");
    }

    #[test]
    fn countdown() {
        let (out, report) = run(&grid(COUNTDOWN));
        assert_halted(&report);
        assert_eq!(out, "321");
    }

    #[test]
    fn subroutine() {
        let (out, report) = run(&grid(SUBROUTINE));
        assert_halted(&report);
        assert_eq!(out, "!7");
        assert!(report.machine.call_stack().is_empty());
    }
}

mod files {
    use super::*;

    #[test]
    fn editor_save_load_round_trip() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("painted.myc");
        let mut editor = EditorGrid::new(4, 2).unwrap();
        editor.set(0, 0, Cell::new(8, 0, 79)).unwrap();
        editor.set(1, 0, Cell::new(1, 0, 1)).unwrap();
        editor.set(1, 1, Cell::new(12, 0, 0)).unwrap();

        // Act
        parser::save(&path, &editor.snapshot()).unwrap();
        let loaded = parser::load(&path).unwrap();

        // Assert
        assert_eq!(loaded, editor.snapshot());
        assert_eq!(run(&loaded).0, "O");
    }

    #[test]
    fn listing_shows_painted_cells() {
        let program = grid(SUBROUTINE);
        let described: Vec<String> = listing(&program)
            .into_iter()
            .map(|info| info.description)
            .collect();

        assert_eq!(
            described,
            vec![
                "Constants: 0 (\0) and 1 (\u{1})",
                "Move: function call",
                "Constant: 7 (\u{7})",
                "I/O: print int",
                "Constant: 33 (!)",
                "I/O: print char",
                "Move: return",
            ]
        );
    }

    #[test]
    fn load_reports_bad_cell() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.myc");
        std::fs::write(&path, "080041 zz0000\n").unwrap();

        let err = parser::load(&path).unwrap_err();

        assert_eq!(
            err.to_string(),
            "line 1, column 8: invalid cell 'zz0000' (expected RRGGBB)"
        );
    }
}

mod cli {
    use super::*;

    fn mycelium() -> Command {
        Command::new(env!("CARGO_BIN_EXE_mycelium"))
    }

    #[test]
    fn run_prints_output() {
        let output = mycelium().args(["run", "demos/hello.myc"]).output().unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello\n");
    }

    #[test]
    fn cycles_counts_steps() {
        let output = mycelium().args(["cycles", "demos/countdown.myc"]).output().unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "26");
    }

    #[test]
    fn cycle_cap_exits_nonzero() {
        let output = mycelium()
            .args(["run", "demos/countdown.myc", "--max-cycles", "5"])
            .output()
            .unwrap();

        assert!(!output.status.success());
    }

    #[test]
    fn run_json_report() {
        let output = mycelium()
            .args(["run", "demos/subroutine.myc", "--json"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

        assert_eq!(report["status"], "halted");
        assert_eq!(report["output"], "!7");
        assert_eq!(report["cycles"], 7);
    }

    #[test]
    fn new_writes_blank_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.myc");

        let output = mycelium()
            .args(["new", path.to_str().unwrap(), "--width", "3", "--height", "2"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let program = parser::load(&path).unwrap();
        assert_eq!((program.width(), program.height()), (3, 2));
        assert!(program.cells().iter().all(|&c| c == Cell::WHITE));
    }

    #[test]
    fn new_rejects_oversized_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.myc");
        let width = (usize::MAX / 2 + 1).to_string();

        let output = mycelium()
            .args(["new", path.to_str().unwrap(), "--width", &width, "--height", "2"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("Error:"));
        assert!(stderr.contains("too large"));
        assert!(!path.exists());
    }

    fn audit_lines(stderr: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(stderr)
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn audit_to_stderr_records_load_failure() {
        let output = mycelium()
            .args(["--audit", "-", "--audit-json", "run", "demos/nope.myc"])
            .output()
            .unwrap();

        assert!(!output.status.success());
        let entries = audit_lines(&output.stderr);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["action"], "LOAD");
        assert_eq!(entries[0]["severity"], "ERROR");
        assert_eq!(entries[0]["outcome"], "FAILURE");
        assert!(entries[0]["description"].as_str().unwrap().starts_with("io error:"));
    }

    #[test]
    fn audit_to_stderr_warns_on_cycle_cap() {
        let output = mycelium()
            .args(["--audit", "-", "--audit-json", "run", "demos/countdown.myc", "--max-cycles", "5"])
            .output()
            .unwrap();

        assert!(!output.status.success());
        let warning = audit_lines(&output.stderr)
            .into_iter()
            .find(|e| e["action"] == "CYCLE_LIMIT")
            .unwrap();
        assert_eq!(warning["severity"], "WARN");
        assert_eq!(warning["entity_id"], "demos/countdown.myc");
    }

    #[test]
    fn missing_file_fails() {
        let output = mycelium().args(["run", "demos/nope.myc"]).output().unwrap();
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
    }
}
