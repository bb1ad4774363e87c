//! `simplefs`: a small CLI driving the SimpleFS filesystem core.
//!
//! Dispatches on `argv[1]` (the subcommand), mirroring the teacher's
//! busybox-style multicall `match bin.as_str() { ... }` in its own
//! `main.rs`, but against one binary's subcommand rather than a symlink
//! farm's `argv[0]` — `spec.md` §1 puts the interactive shell/REPL out of
//! scope, so each invocation here does exactly one operation and exits.

mod cli;

use std::env;

fn main() {
    env_logger::init();

    let mut args = env::args();
    let bin = args.next().unwrap_or_else(|| "simplefs".to_owned());
    let Some(command) = args.next() else {
        print_usage(&bin);
        std::process::exit(1);
    };
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "format" => cli::format::main(&bin, &rest),
        "mount" => cli::mount::main(&bin, &rest),
        "debug" => cli::debug::main(&bin, &rest),
        "create" => cli::create::main(&bin, &rest),
        "remove" => cli::remove::main(&bin, &rest),
        "stat" => cli::stat::main(&bin, &rest),
        "cat" => cli::cat::main(&bin, &rest),
        "copyin" => cli::copyin::main(&bin, &rest),
        "copyout" => cli::copyout::main(&bin, &rest),
        "-h" | "--help" => {
            print_usage(&bin);
        }
        other => cli::error(&bin, format!("unknown command `{other}`")),
    }
}

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {bin} format <image> <blocks>");
    eprintln!("  {bin} mount <image>");
    eprintln!("  {bin} debug <image>");
    eprintln!("  {bin} create <image>");
    eprintln!("  {bin} remove <image> <n>");
    eprintln!("  {bin} stat <image> <n>");
    eprintln!("  {bin} cat <image> <n>");
    eprintln!("  {bin} copyin <image> <path> <n>");
    eprintln!("  {bin} copyout <image> <n> <path>");
}
