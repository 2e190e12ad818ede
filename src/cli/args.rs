use clap::Parser;
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_DATA_DIR;

#[derive(Parser)]
#[command(name = "crime-processor")]
#[command(about = "Jefferson County auto-theft incident cleaner")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = DEFAULT_DATA_DIR,
        help = "Data directory holding raw_data/ inputs; artifacts are written here"
    )]
    pub data_dir: PathBuf,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, default_value = "false", help = "Suppress progress output")]
    pub quiet: bool,
}
