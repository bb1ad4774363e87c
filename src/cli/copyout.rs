//! `simplefs copyout <image> <n> <path>` — copies inode `n`'s full content
//! out to a local file.

use crate::cli::{error, parse_inode};
use simplefs::{FileBlockDevice, SimpleFs};
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} copyout <image> <n> <path>");
}

/// Entry point for the `copyout` subcommand.
pub fn main(bin: &str, args: &[String]) {
    let [image, n, path] = args else {
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
    fs.unmount().unwrap_or_else(|e| error(bin, e));
    std::fs::write(path, &buf).unwrap_or_else(|e| error(bin, format!("{path}: {e}")));
}
