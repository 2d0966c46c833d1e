use blueprint_build::Platform;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Turn drag-and-drop component trees into mobile app projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate project source from a saved project file
    Export {
        /// Project JSON with `components` and `config`
        project: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Write a single zip archive instead of a source tree
        #[arg(long, conflicts_with = "downloads")]
        zip: bool,

        /// Write only the primary files as flat downloads
        #[arg(long)]
        downloads: bool,
    },

    /// Run a simulated build and write its instructions document
    Build {
        /// Project JSON with `components` and `config`
        project: PathBuf,

        /// Target platform
        #[arg(short, long, value_enum, default_value_t = PlatformArg::Android)]
        platform: PlatformArg,

        /// Build a release instead of a debug build
        #[arg(long)]
        release: bool,

        /// Directory for the instructions document
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Skip the simulated stage delays
        #[arg(long)]
        fast: bool,
    },

    /// Serve the export API over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Android,
    Ios,
    Both,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Android => Platform::Android,
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Both => Platform::Both,
        }
    }
}
