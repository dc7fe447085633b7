use std::process::exit;

use anggaran_cli::cli::parse_args;
use anggaran_cli::cli::run;

fn main() {
    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("{e:#}");
        exit(1);
    }
}
