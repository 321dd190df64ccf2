//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffcode::tools::cli::{huffopts_init, HuffOpts};
use huffcode::tools::data_in::read_input;
use huffcode::tools::report::render;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let opts = huffopts_init();

    if let Err(e) = run(&opts) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Done.");
}

/// Encode and decode the phrase, then print the results.
fn run(opts: &HuffOpts) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(opts)?;
    print!("{}", render(&text, opts)?);
    Ok(())
}
