//! `simplefs mount <image>` — verifies an image mounts cleanly and reports
//! its basic sizing, then unmounts.
//!
//! Grounded on `mount/src/main.rs`: the teacher's `mount` performs the
//! syscall and exits silently on success. SimpleFS has no kernel to hand the
//! mount to, so this subcommand's useful work is the sanity check itself —
//! read the superblock, verify the magic, rebuild the bitmap — reporting a
//! one-line summary rather than nothing at all.

use crate::cli::error;
use simplefs::{FileBlockDevice, SimpleFs};
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} mount <image>");
}

/// Entry point for the `mount` subcommand.
pub fn main(bin: &str, args: &[String]) {
    let [image] = args else {
        print_usage(bin);
        std::process::exit(1);
    };
    let device = FileBlockDevice::open(Path::new(image))
        .unwrap_or_else(|e| error(bin, format!("{image}: {e}")));
    let mut fs = SimpleFs::new();
    fs.mount(device).unwrap_or_else(|e| error(bin, e));
    let info = fs.debug().unwrap_or_else(|e| error(bin, e));
    println!(
        "{image}: {} blocks, {} inode blocks, {} inodes",
        info.blocks, info.inode_blocks, info.inodes
    );
    fs.unmount().unwrap_or_else(|e| error(bin, e));
}
