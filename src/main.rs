use clap::Parser;
use crime_processor::cli::{run, Cli};
use crime_processor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
