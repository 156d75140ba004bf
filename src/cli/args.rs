use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqi-animator")]
#[command(about = "Synthetic Delhi AQI readings rendered as an animated station map")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file (toml, yaml, json); AQI_* environment variables override it"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate readings, render one frame per day and stitch them into a GIF
    Animate {
        #[arg(long, help = "First day to generate (YYYY-MM-DD)")]
        start_date: Option<String>,

        #[arg(long, help = "Last day to generate, inclusive (YYYY-MM-DD)")]
        end_date: Option<String>,

        #[arg(long, help = "Directory for frame images [default: aqi_frames]")]
        frames_dir: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Animation output path [default: delhi_aqi_animation.gif]"
        )]
        output: Option<PathBuf>,

        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..=50),
            help = "Playback rate in frames per second, 1-50 [default: 5]"
        )]
        fps: Option<u32>,
    },

    /// Generate and check the reading table without rendering
    Generate {
        #[arg(long, help = "First day to generate (YYYY-MM-DD)")]
        start_date: Option<String>,

        #[arg(long, help = "Last day to generate, inclusive (YYYY-MM-DD)")]
        end_date: Option<String>,

        #[arg(short, long, help = "Export the table to this file")]
        output: Option<PathBuf>,

        #[arg(short, long, default_value = "csv", help = "Export format: csv or json")]
        format: String,
    },

    /// Encode the frames already in a directory into a GIF
    Stitch {
        #[arg(long, help = "Directory containing aqi_frame_NNNN.png files")]
        frames_dir: PathBuf,

        #[arg(short, long, help = "Animation output path")]
        output: PathBuf,

        #[arg(
            long,
            default_value = "5",
            value_parser = clap::value_parser!(u32).range(1..=50),
            help = "Playback rate in frames per second, 1-50"
        )]
        fps: u32,
    },

    /// Display information about an animation file
    Info {
        #[arg(short, long)]
        file: PathBuf,
    },
}
