//! CLI entry point for the preimage counter

use clap::Parser;
use gridpreimage::io::cli::{Cli, CountProcessor};

fn main() -> gridpreimage::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = CountProcessor::new(cli);
    processor.process()
}
