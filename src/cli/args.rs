use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Frame width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Simulated frame rate
    #[arg(long)]
    pub fps: Option<f64>,

    /// Frame queue capacity in slots
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Number of frames to consume before exiting
    #[arg(long)]
    pub frames: Option<u64>,

    #[arg(long)]
    pub debug: bool,

    /// Optional log file path
    #[arg(long)]
    pub log_file: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<String>,
}
