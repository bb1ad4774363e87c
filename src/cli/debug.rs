//! `simplefs debug <image>` — dumps superblock and live-inode state.
//!
//! Grounded on `spec.md` §6's `fs_debug` description and the teacher's
//! `lsmod` listing format (`lsmod/src/main.rs`): a header line, then one
//! line per live entry.

use crate::cli::error;
use simplefs::{FileBlockDevice, SimpleFs};
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} debug <image>");
}

/// Entry point for the `debug` subcommand.
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

    println!("superblock:");
    println!("    magic: {}", if info.magic_valid { "valid" } else { "INVALID" });
    println!("    {} blocks", info.blocks);
    println!("    {} inode blocks", info.inode_blocks);
    println!("    {} inodes", info.inodes);
    if info.live_inodes.is_empty() {
        println!("no valid inodes");
    } else {
        for inode in &info.live_inodes {
            println!(
                "inode {}: size {} bytes, {} direct blocks{}",
                inode.number,
                inode.size,
                inode.direct_count,
                if inode.has_indirect { ", indirect block allocated" } else { "" }
            );
        }
    }

    fs.unmount().unwrap_or_else(|e| error(bin, e));
}
