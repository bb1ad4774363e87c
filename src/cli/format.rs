//! `simplefs format <image> <blocks>` — creates and formats a fresh image.
//!
//! Grounded on `mkfs/src/ext2.rs`'s `Ext2Factory::create` (truncate/size the
//! device file, write the metadata region) but unconditional, per `spec.md`
//! §4.4: `format` always overwrites, there is no "already has a filesystem"
//! prompt as in the teacher's interactive `mkfs`.

use crate::cli::{error, parse_blocks};
use simplefs::FileBlockDevice;
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} format <image> <blocks>");
}

/// Entry point for the `format` subcommand.
pub fn main(bin: &str, args: &[String]) {
    let [image, blocks] = args else {
        print_usage(bin);
        std::process::exit(1);
    };
    let blocks = parse_blocks(bin, blocks);
    let mut device = FileBlockDevice::create(Path::new(image), blocks)
        .unwrap_or_else(|e| error(bin, format!("{image}: {e}")));
    simplefs::format(&mut device).unwrap_or_else(|e| error(bin, e));
}
