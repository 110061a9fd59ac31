use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::opt::FillStrategy;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the fill strategy of the config
    #[arg(long, value_enum)]
    pub strategy: Option<FillStrategy>,
    /// Only report suggestions for the given layout, do not auto-fill
    #[arg(long, default_value_t = false)]
    pub no_fill: bool,
}
