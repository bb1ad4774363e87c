//! `simplefs create <image>` — allocates a fresh, empty inode.

use crate::cli::error;
use simplefs::{FileBlockDevice, SimpleFs};
use std::path::Path;

/// Prints this subcommand's usage.
pub fn print_usage(bin: &str) {
    eprintln!("Usage: {bin} create <image>");
}

/// Entry point for the `create` subcommand.
pub fn main(bin: &str, args: &[String]) {
    let [image] = args else {
        print_usage(bin);
        std::process::exit(1);
    };
    let device = FileBlockDevice::open(Path::new(image))
        .unwrap_or_else(|e| error(bin, format!("{image}: {e}")));
    let mut fs = SimpleFs::new();
    fs.mount(device).unwrap_or_else(|e| error(bin, e));
    let n = fs.create().unwrap_or_else(|e| error(bin, e));
    println!("{n}");
    fs.unmount().unwrap_or_else(|e| error(bin, e));
}
