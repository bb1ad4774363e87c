//! Shared CLI plumbing: usage/error reporting and argument parsing helpers.
//!
//! Grounded on `utils::error`/`utils::args` (`src/utils/lib.rs`) and the
//! `print_usage(bin)` convention every teacher subcommand (`mount`, `umount`,
//! `mkfs`, `fdisk`) repeats in its own `main.rs`.

use std::fmt;
use std::process::exit;

pub mod cat;
pub mod copyin;
pub mod copyout;
pub mod create;
pub mod debug;
pub mod format;
pub mod mount;
pub mod remove;
pub mod stat;

/// Writes an error to stderr, then exits with a non-zero status
/// (`spec.md` §6: "non-zero on any error").
pub fn error<M: fmt::Display>(bin: &str, msg: M) -> ! {
    eprintln!("{bin}: error: {msg}");
    exit(1);
}

/// Parses `s` as an inode number, or exits with a usage error.
pub fn parse_inode(bin: &str, s: &str) -> u32 {
    s.parse().unwrap_or_else(|_| error(bin, format!("invalid inode number `{s}`")))
}

/// Parses `s` as a block count, or exits with a usage error.
pub fn parse_blocks(bin: &str, s: &str) -> u32 {
    s.parse().unwrap_or_else(|_| error(bin, format!("invalid block count `{s}`")))
}
