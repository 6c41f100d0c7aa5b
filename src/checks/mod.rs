//! Per-file and per-run checks.
//!
//! Each check catches its own errors and degrades to a fallback result,
//! so the per-file loop always completes for every discovered file.

pub mod probe;
pub mod quality;
pub mod syntax;
pub mod testsuite;
