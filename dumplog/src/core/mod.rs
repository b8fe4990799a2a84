//! Deterministic, pure logic shared by the dumper.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod coerce;
pub mod export;
pub mod extension;
pub mod types;
pub mod value;
