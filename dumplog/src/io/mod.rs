//! I/O helpers for dumping values to disk.

pub mod config;
pub mod dumper;
pub mod sink;
