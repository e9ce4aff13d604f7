//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `reviewlog_core` linkage and
//!   schema bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use reviewlog_core::db::migrations::latest_version;
use reviewlog_core::db::open_db_in_memory;

fn main() {
    println!("reviewlog_core version={}", reviewlog_core::core_version());
    match open_db_in_memory() {
        Ok(_conn) => println!("reviewlog_core schema_version={}", latest_version()),
        Err(err) => {
            eprintln!("schema bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
