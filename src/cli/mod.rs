pub mod app;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "entitygen")]
#[command(version, about = "Generate per-entity sources from a Core Data model")]
pub struct Cli {
    /// Model file (`contents` XML or JSON) or `.xcdatamodel` directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory [default: directory containing the input file or model bundle]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory with templates replacing the built-in set
    #[arg(short, long)]
    pub template_dir: Option<PathBuf>,

    /// Template file name
    #[arg(long, default_value = entitygen::render::DEFAULT_TEMPLATE)]
    pub template: String,

    /// Appended to the entity name in output file names
    #[arg(long, default_value = entitygen::config::DEFAULT_FILE_SUFFIX)]
    pub suffix: String,

    #[arg(long, default_value = entitygen::config::DEFAULT_FILE_EXTENSION)]
    pub extension: String,

    /// Print the resolved model as JSON instead of writing files
    #[arg(long)]
    pub dump_model: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
