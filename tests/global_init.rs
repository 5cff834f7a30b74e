//! Integration tests for installing a caller-built process-wide logger.
//!
//! The process-wide logger lives for the whole test binary, so everything runs
//! inside one test to keep the sequence deterministic.

use std::fs;
use std::sync::Arc;

use duolog::{Category, Level, Logger, MemoryConsole, MemoryDiagnostics, Verbosity};

/// Verifies an installed logger backs every free function.
#[test]
fn installed_logger_backs_free_functions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");
    let console = Arc::new(MemoryConsole::new());
    let diagnostics = Arc::new(MemoryDiagnostics::new());

    let installed = duolog::init(
        Logger::builder()
            .console(Arc::clone(&console))
            .diagnostics(Arc::clone(&diagnostics))
            .build(),
    )
    .unwrap();
    assert!(std::ptr::eq(installed, duolog::global()));

    // ========================================================================
    // Formatting and emit helpers
    // ========================================================================

    duolog::toggle_timestamp();
    duolog::toggle_color();
    duolog::info(Level::Regular, format_args!("hello {}", "world"));
    duolog::errorln(Level::Regular, &[&"code=", &2]);
    duolog::emit(Level::Debug, Category::Info, format_args!("hidden"));
    duolog::info!(duolog::global(), "via {}", "macro");

    assert_eq!(console.stdout(), "[INFO]: hello world\n[INFO]: via macro\n");
    assert_eq!(console.stderr(), "[ERROR]: code=2\n");
    console.take();

    // ========================================================================
    // Verbosity
    // ========================================================================

    duolog::set_verbosity_str("shout");
    assert_eq!(duolog::config().verbosity(), Verbosity::Regular);
    assert_eq!(diagnostics.drain().len(), 1);

    duolog::try_set_verbosity("debug").unwrap();
    duolog::bench(Level::Debug, format_args!("1ms"));
    assert_eq!(console.take().0, "[BENCH]: 1ms\n");

    // ========================================================================
    // File output
    // ========================================================================

    duolog::start_file_output();
    assert_eq!(diagnostics.drain().len(), 1);

    duolog::set_output_file(&path);
    duolog::start_file_output();
    duolog::toggle_silent();
    duolog::task(Level::Verbose, format_args!("to file"));
    duolog::stop_file_output();
    duolog::toggle_silent();
    duolog::task(Level::Verbose, format_args!("to console"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "[TASK]: to file\n");
    assert_eq!(console.take().0, "[TASK]: to console\n");
    assert!(diagnostics.is_empty());

    // ========================================================================
    // Second install
    // ========================================================================

    let rejected = duolog::init(Logger::new()).unwrap_err();
    assert_eq!(rejected.config(), Logger::new().config());
}
