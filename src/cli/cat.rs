//! `simplefs cat <image> <n>` — writes inode `n`'s full content to stdout.

use crate::cli::{error, parse_inode};
use simplefs::{FileBlockDevice, SimpleFs};
use std::io::Write;
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} cat <image> <n>");
}

/// Entry point for the `cat` subcommand.
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
    let size = fs.stat(n).unwrap_or_else(|e| error(bin, e)) as usize;
    let mut buf = vec![0u8; size];
    fs.read(n, &mut buf, size, 0).unwrap_or_else(|e| error(bin, e));
    std::io::stdout().write_all(&buf).unwrap_or_else(|e| error(bin, e));
    fs.unmount().unwrap_or_else(|e| error(bin, e));
}
