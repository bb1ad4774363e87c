//! `simplefs stat <image> <n>` — prints inode `n`'s size in bytes.

use crate::cli::{error, parse_inode};
use simplefs::{FileBlockDevice, SimpleFs};
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} stat <image> <n>");
}

/// Entry point for the `stat` subcommand.
pub fn main(bin: &str, args: &[String]) {
    let [image, n] = args else {
        print_usage(bin);
        std::process::exit(1);
    };
    let n = parse_inode(bin, n);
    let device = FileBlockDevice::open(Path::new(image))
        .unwrap_or_else(|e| error(bin, format!("{image}: {e}")));
    let mut fs = SimpleFs::new();
    fs.mount(device).unwrap_or_else(|e| error(bin, e));
    let size = fs.stat(n).unwrap_or_else(|e| error(bin, e));
    println!("{size}");
    fs.unmount().unwrap_or_else(|e| error(bin, e));
}
