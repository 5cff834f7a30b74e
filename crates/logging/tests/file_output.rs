//! Integration tests for file routing: plain output, shared timestamps,
//! concurrent appends and failure reporting.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::{Local, TimeZone};
use logging::{
    Category, Diagnostic, DiagnosticHandler, FixedClock, Level, Logger, MemoryConsole,
    MemoryDiagnostics, Verbosity,
};

fn clock() -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap())
}

// ============================================================================
// Rendering
// ============================================================================

/// Verifies file lines never carry colour while the console copy does.
#[test]
fn file_lines_are_never_coloured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let console = Arc::new(MemoryConsole::new());
    let logger = Logger::builder()
        .console(Arc::clone(&console))
        .clock(clock())
        .build();
    logger.set_output_file(&path);
    logger.set_regular_routing(true, true);

    logger.alert(Level::Regular, format_args!("low disk"));

    let file = fs::read_to_string(&path).unwrap();
    assert_eq!(file, "2023-12-31 23:59:58\t[ALERT]: low disk\n");
    assert!(!file.contains('\x1b'));
    assert_eq!(
        console.stdout(),
        "2023-12-31 23:59:58\t\x1b[93m[ALERT]\x1b[0m: low disk\n"
    );
}

/// Verifies console and file copies of one message share a timestamp.
#[test]
fn console_and_file_share_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let console = Arc::new(MemoryConsole::new());
    let logger = Logger::builder().console(Arc::clone(&console)).build();
    logger.toggle_color();
    logger.set_output_file(&path);
    logger.set_regular_routing(true, true);

    logger.info(Level::Regular, format_args!("same"));

    assert_eq!(console.stdout(), fs::read_to_string(&path).unwrap());
}

/// Verifies an existing file is appended to, never truncated.
#[test]
fn existing_content_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    fs::write(&path, "previous run\n").unwrap();

    let logger = Logger::builder().console(MemoryConsole::new()).build();
    logger.toggle_timestamp();
    logger.set_output_file(&path);
    logger.set_regular_routing(false, true);
    logger.info(Level::Regular, format_args!("next run"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n[INFO]: next run\n");
}

/// Verifies changing the output file redirects later messages.
#[test]
fn output_file_can_be_switched() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");
    let logger = Logger::builder().console(MemoryConsole::new()).build();
    logger.toggle_timestamp();
    logger.set_regular_routing(false, true);

    logger.set_output_file(&first);
    logger.info(Level::Regular, format_args!("one"));
    logger.set_output_file(&second);
    logger.info(Level::Regular, format_args!("two"));

    assert_eq!(fs::read_to_string(&first).unwrap(), "[INFO]: one\n");
    assert_eq!(fs::read_to_string(&second).unwrap(), "[INFO]: two\n");
}

// ============================================================================
// Concurrency
// ============================================================================

/// Verifies 100 concurrent emits produce 100 intact lines.
#[test]
fn concurrent_emits_do_not_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Arc::new(Logger::builder().console(MemoryConsole::new()).build());
    logger.set_output_file(&path);
    logger.set_verbosity(Verbosity::Debug);
    logger.set_routing(false, true, false, true, false, true);

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let level = Level::ALL[i % 3];
                logger.task(level, format_args!("worker {i:03} {}", "x".repeat(200)));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 100);

    let mut seen = HashSet::new();
    for line in lines {
        let (_, rest) = line.split_once("\t[TASK]: worker ").unwrap();
        let (id, tail) = rest.split_once(' ').unwrap();
        assert_eq!(tail, "x".repeat(200));
        assert!(seen.insert(id.to_owned()));
    }
}

/// Verifies concurrent configuration changes and emits do not deadlock.
#[test]
fn concurrent_mutation_and_emit() {
    let console = Arc::new(MemoryConsole::new());
    let logger = Arc::new(Logger::builder().console(Arc::clone(&console)).build());

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..200 {
                logger.toggle_timestamp();
                logger.toggle_color();
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..50 {
                    logger.info(Level::Regular, format_args!("{i}"));
                }
            });
        }
    });

    assert_eq!(console.stdout().lines().count(), 200);
    assert!(logger.config().timestamp());
    assert!(logger.config().color());
}

// ============================================================================
// Failures
// ============================================================================

/// Verifies an unwritable file is reported and the console still gets the line.
#[test]
fn unwritable_file_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let console = Arc::new(MemoryConsole::new());
    let diagnostics = Arc::new(MemoryDiagnostics::new());
    let logger = Logger::builder()
        .console(Arc::clone(&console))
        .diagnostics(Arc::clone(&diagnostics))
        .build();
    logger.toggle_timestamp();
    logger.toggle_color();
    logger.set_output_file(dir.path().join("missing").join("app.log"));
    logger.set_regular_routing(true, true);

    logger.info(Level::Regular, format_args!("still here"));

    assert_eq!(console.stdout(), "[INFO]: still here\n");
    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("app.log"));
}

/// Verifies file routing with no output path is reported, not fatal.
#[test]
fn file_route_without_path_is_reported() {
    let diagnostics = Arc::new(MemoryDiagnostics::new());
    let console = Arc::new(MemoryConsole::new());
    let logger = Logger::builder()
        .console(Arc::clone(&console))
        .diagnostics(Arc::clone(&diagnostics))
        .build();
    logger.set_regular_routing(false, true);
    logger.toggle_dual_mode();

    logger.emit(Level::Regular, Category::Bench, format_args!("t"));

    assert_eq!(diagnostics.len(), 1);
    assert!(console.stdout().ends_with("t\n"));
}

/// Verifies starting file output without a path changes nothing.
#[test]
fn start_file_output_requires_a_path() {
    let diagnostics = Arc::new(MemoryDiagnostics::new());
    let logger = Logger::builder()
        .console(MemoryConsole::new())
        .diagnostics(Arc::clone(&diagnostics))
        .build();
    let before = logger.config();

    logger.start_file_output();

    assert_eq!(logger.config(), before);
    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("output file"));
}

/// Verifies start and stop flip file routing for every level.
#[test]
fn start_and_stop_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let logger = Logger::builder().console(MemoryConsole::new()).build();
    logger.toggle_timestamp();
    logger.set_verbosity(Verbosity::Debug);
    logger.set_output_file(&path);

    logger.start_file_output();
    for level in Level::ALL {
        logger.emit(level, Category::Info, format_args!("{level}"));
    }
    logger.stop_file_output();
    logger.emit(Level::Regular, Category::Info, format_args!("after"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[INFO]: regular\n[INFO]: verbose\n[INFO]: debug\n"
    );
}

/// Records the I/O error kind behind each sink diagnostic.
#[derive(Default)]
struct SinkErrorKinds(Mutex<Vec<Option<io::ErrorKind>>>);

impl DiagnosticHandler for SinkErrorKinds {
    fn report(&self, diagnostic: &Diagnostic) {
        if let Diagnostic::FileSink(err) | Diagnostic::ConsoleSink(err) = diagnostic {
            self.0
                .lock()
                .unwrap()
                .push(err.io_error().map(io::Error::kind));
        }
    }
}

/// Verifies sink diagnostics carry the underlying I/O error when there is one.
#[test]
fn file_diagnostics_keep_io_error_kind() {
    let dir = tempfile::tempdir().unwrap();
    let kinds = Arc::new(SinkErrorKinds::default());
    let logger = Logger::builder()
        .console(MemoryConsole::new())
        .diagnostics(Arc::clone(&kinds))
        .build();
    logger.set_regular_routing(false, true);

    logger.set_output_file(dir.path().join("missing").join("app.log"));
    logger.info(Level::Regular, format_args!("no directory"));
    logger.set_output_file("");
    logger.info(Level::Regular, format_args!("no path"));

    assert_eq!(
        *kinds.0.lock().unwrap(),
        vec![Some(io::ErrorKind::NotFound), None]
    );
}
