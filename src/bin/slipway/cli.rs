//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Slipway - cross-platform build orchestrator for the native library
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the native library for a target platform
    Build(BuildArgs),

    /// List supported target platforms
    Platforms,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Target platform (see `slipway platforms`)
    pub platform: String,

    /// Build in release mode (MinSizeRel)
    #[arg(short, long)]
    pub release: bool,

    /// Build a static library instead of a shared one
    #[arg(long = "static")]
    pub static_lib: bool,

    /// Enable the JNI binding layer
    #[arg(long)]
    pub jni: bool,

    /// Stage the built artifact into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Suffix the staged file name with the platform identity
    #[arg(long)]
    pub platform_suffix: bool,

    /// Directory containing CMakeLists.txt (defaults to the current directory)
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,
}
