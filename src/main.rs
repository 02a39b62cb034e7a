use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use serde_json::json;

use mycelium::audit::{self, ActionCategory, AuditConfig, AuditEntry, AuditFormat, Severity};
use mycelium::tooling::{inspect_all, listing, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use mycelium::{parser, EditorGrid, MyceliumResult, Program, RunConfig, RunStatus, Runner, WriterSink};

#[derive(Parser, Debug)]
#[command(name = "mycelium", version, about = "Run and inspect Mycelium grid programs")]
struct Cli {
    /// Enable audit logging (default file: mycelium-audit.log, `-` for stderr)
    #[arg(long, global = true, value_name = "FILE", num_args = 0..=1,
          default_missing_value = "mycelium-audit.log")]
    audit: Option<PathBuf>,

    /// Use JSON Lines format for audit output
    #[arg(long, global = true)]
    audit_json: bool,

    /// Minimum audit severity: debug, info, warn, error
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info",
          value_parser = parse_severity)]
    audit_level: Severity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program and print its output
    Run {
        file: PathBuf,
        /// Stop after this many cycles
        #[arg(long)]
        max_cycles: Option<u64>,
        /// Print the machine state to stderr after every step
        #[arg(long)]
        trace: bool,
        /// Print a JSON report instead of raw output
        #[arg(long)]
        json: bool,
    },
    /// Count the cycles a program takes to halt
    Cycles {
        file: PathBuf,
        #[arg(long)]
        max_cycles: Option<u64>,
    },
    /// Describe the instructions in a program
    Describe {
        file: PathBuf,
        /// Include no-op and reserved cells
        #[arg(long)]
        all: bool,
    },
    /// Write a blank (all white) program
    New {
        file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,
    },
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    Severity::parse(s).ok_or_else(|| format!("unknown severity '{}'", s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.audit {
        let base = if path.as_os_str() == "-" {
            AuditConfig::stderr_only()
        } else {
            AuditConfig::to_file(path.clone())
        };
        let config = base
            .with_min_severity(cli.audit_level)
            .with_format(if cli.audit_json { AuditFormat::JsonLines } else { AuditFormat::Text });
        if let Err(e) = audit::init_global_logger(config) {
            eprintln!("Warning: Could not initialize audit logger: {}", e);
        }
    }

    let result = match cli.command {
        Commands::Run { file, max_cycles, trace, json } => run(&file, max_cycles, trace, json),
        Commands::Cycles { file, max_cycles } => cycles(&file, max_cycles),
        Commands::Describe { file, all } => describe(&file, all),
        Commands::New { file, width, height } => new_program(&file, width, height),
    };

    if let Some(logger) = audit::global_logger() {
        let _ = logger.flush();
    }

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load(path: &Path) -> MyceliumResult<Program> {
    let started = Instant::now();
    let name = path.display().to_string();
    match parser::load(path) {
        Ok(program) => {
            audit::audit(
                AuditEntry::new("LOAD", "Program", &name, "Program loaded")
                    .with_category(ActionCategory::Load)
                    .with_duration_us(started.elapsed().as_micros() as u64)
                    .with_meta("width", program.width().to_string())
                    .with_meta("height", program.height().to_string()),
            );
            Ok(program)
        }
        Err(e) => {
            audit::audit_error("LOAD", "Program", &name, &format!("{} error: {}", e.category(), e));
            Err(e)
        }
    }
}

fn runner(path: &Path, max_cycles: Option<u64>) -> Runner {
    let config = max_cycles.map_or_else(RunConfig::unbounded, RunConfig::bounded);
    Runner::new(config).with_label(path.display().to_string())
}

fn exit_for(status: RunStatus) -> ExitCode {
    match status {
        RunStatus::Halted => ExitCode::SUCCESS,
        RunStatus::CycleLimit => ExitCode::FAILURE,
    }
}

fn run(path: &Path, max_cycles: Option<u64>, trace: bool, json: bool) -> MyceliumResult<ExitCode> {
    let program = load(path)?;
    let runner = runner(path, max_cycles);

    if json {
        let mut output = String::new();
        let report = if trace {
            runner.trace(&program, &mut output, print_snapshot_json)
        } else {
            runner.run(&program, &mut output)
        };
        let summary = json!({
            "status": report.status.as_str(),
            "cycles": report.cycles,
            "output": output,
            "machine": report.machine.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(exit_for(report.status));
    }

    let stdout = io::stdout();
    let mut sink = WriterSink::new(stdout.lock());
    let report = if trace {
        runner.trace(&program, &mut sink, |snap| {
            eprintln!(
                "[{:>6}] ip=({}, {}) {} mp={} stack={:?}",
                snap.cycles, snap.ip.0, snap.ip.1, snap.direction, snap.mem_ptr, snap.stack
            );
        })
    } else {
        runner.run(&program, &mut sink)
    };
    let emitted = sink.items_written() > 0;
    let mut stdout = sink.into_result()?;
    if emitted {
        writeln!(stdout)?;
    }

    if report.status == RunStatus::CycleLimit {
        eprintln!("Stopped after {} cycles without halting", report.cycles);
    }
    Ok(exit_for(report.status))
}

fn print_snapshot_json(snap: &mycelium::MachineSnapshot) {
    match serde_json::to_string(snap) {
        Ok(line) => eprintln!("{}", line),
        Err(e) => eprintln!("Warning: could not serialize state: {}", e),
    }
}

fn cycles(path: &Path, max_cycles: Option<u64>) -> MyceliumResult<ExitCode> {
    let program = load(path)?;
    match runner(path, max_cycles).count_cycles(&program) {
        Some(n) => {
            println!("{}", n);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Did not halt within {} cycles", max_cycles.unwrap_or_default());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn describe(path: &Path, all: bool) -> MyceliumResult<ExitCode> {
    let program = load(path)?;
    let cells = if all { inspect_all(&program) } else { listing(&program) };

    println!("{} ({}x{})", path.display(), program.width(), program.height());
    for info in cells {
        println!();
        println!("{}", info);
    }
    Ok(ExitCode::SUCCESS)
}

fn new_program(path: &Path, width: usize, height: usize) -> MyceliumResult<ExitCode> {
    let grid = EditorGrid::new(width, height)?;
    parser::save(path, &grid.snapshot())?;
    audit::audit(
        AuditEntry::new("CREATE", "Program", path.display().to_string(), "Blank program written")
            .with_category(ActionCategory::Edit)
            .with_meta("width", width.to_string())
            .with_meta("height", height.to_string()),
    );
    println!("Wrote {}x{} blank program to {}", width, height, path.display());
    Ok(ExitCode::SUCCESS)
}
