// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "transform-pipeline")]
#[command(about = "Headless camera and transform pipeline driver", long_about = None)]
pub struct Cli {
    /// Scene config (JSON). Uses the built-in demo scene when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: usize,

    /// Fixed frame time in seconds; 0 uses the wall clock
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub delta: f32,

    /// Print the final frame's uniform blocks as JSON
    #[arg(long)]
    pub dump: bool,

    /// Print the effective scene config as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}
