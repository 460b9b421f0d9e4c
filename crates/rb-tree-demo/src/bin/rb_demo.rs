//! `rb-demo`: insert random samples into a red-black tree, query it and
//! print the tree.
//!
//! Usage:
//!   rb-demo [--config FILE] [--count N] [--queries N] [--min N] [--max N]
//!           [--seed N] [--log-level LEVEL] [--no-dump]

use std::io::{self, Write};

use log::info;
use rb_tree_demo::{run, DemoConfig, DemoError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = real_main(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn real_main(args: &[String]) -> Result<(), DemoError> {
    let config = DemoConfig::from_args(args)?;
    TermLogger::init(
        config.level_filter()?,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run(&config, &mut out)?;
    out.flush()?;

    info!(
        "run with seed {} stored {} samples, height {}",
        report.seed, report.inserted, report.height
    );
    Ok(())
}
