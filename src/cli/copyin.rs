//! `simplefs copyin <image> <path> <n>` — copies a local file's content into
//! inode `n`, starting at offset 0.

use crate::cli::{error, parse_inode};
use simplefs::{FileBlockDevice, SimpleFs};
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} copyin <image> <path> <n>");
}

/// Entry point for the `copyin` subcommand.
pub fn main(bin: &str, args: &[String]) {
    let [image, path, n] = args else {
        print_usage(bin);
        std::process::exit(1);
    };
    let n = parse_inode(bin, n);
    let data = std::fs::read(path).unwrap_or_else(|e| error(bin, format!("{path}: {e}")));
    let device = FileBlockDevice::open(Path::new(image))
        .unwrap_or_else(|e| error(bin, format!("{image}: {e}")));
    let mut fs = SimpleFs::new();
    fs.mount(device).unwrap_or_else(|e| error(bin, e));
    let written = fs.write(n, &data, 0).unwrap_or_else(|e| error(bin, e));
    if written < data.len() {
        eprintln!(
            "{bin}: warning: {path}: only {written} of {} bytes fit in inode {n}",
            data.len()
        );
    }
    fs.unmount().unwrap_or_else(|e| error(bin, e));
}
