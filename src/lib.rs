//! Reports the hardware architecture of the host machine.
//!
//! The operating system is the source of truth: on Unix targets this crate
//! wraps `uname(2)` and hands back the machine identifier the kernel
//! reports. Because different systems spell the same architecture in
//! different ways (`amd64`, `x86_64`, `arm64`, ...), the reported string can
//! also be resolved against a canonical naming table, data-driven from a
//! JSON document compiled into the crate.

pub mod arch;
mod schema;
