//! Error types for the scanner.
//!
//! Only the I/O side of scanning can fail: opening the source and reading
//! bytes from it. Malformed CCX text is reported through `Unknown` tokens
//! instead. This module includes:
//!
//! - The `ScanError` enum built with `thiserror`
//! - Error names and suggestion tips for user-facing reports

pub mod errors;
