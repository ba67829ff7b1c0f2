//! Collectors for the Linux `/proc` filesystem.
//!
//! `parser` holds the pure text parsers; `memory` and `cpu` wrap them with
//! file access.

pub mod cpu;
pub mod memory;
pub mod parser;

pub use cpu::CpuCollector;
pub use memory::MemoryCollector;
pub use parser::ParseError;
