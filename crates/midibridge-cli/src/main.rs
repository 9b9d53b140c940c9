//! midibridge - host-side bridge to the JsonMidiPlayer native library.
//!
//! Resolves the platform-specific library next to this executable, binds its
//! exports, and runs them. The adapter returns typed errors and never prints
//! on the error path; this binary is the outermost caller that decides to
//! report the diagnostic and exit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;

use midibridge_ffi::{PlayerLibrary, DEFAULT_LIBRARY_NAME};

#[derive(Parser)]
#[command(
    name = "midibridge",
    version,
    about = "Bridge to the JsonMidiPlayer native library"
)]
struct Cli {
    /// Directory containing the `lib` subdirectory with the native library.
    /// Defaults to the directory of this executable.
    #[arg(long, global = true)]
    lib_dir: Option<PathBuf>,

    /// Base name of the native library.
    #[arg(long, global = true, default_value = DEFAULT_LIBRARY_NAME)]
    lib_name: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Load the library and call `add_ctypes` as a link check.
    Check {
        #[arg(default_value_t = 3, allow_negative_numbers = true)]
        a: i32,
        #[arg(default_value_t = 4, allow_negative_numbers = true)]
        b: i32,
    },
    /// Hand a JSON file to `PlayList_ctypes` for playback.
    Play {
        /// Path to the JSON document.
        file: PathBuf,
        /// Ask the player for verbose output.
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let base_dir = match cli.lib_dir {
        Some(dir) => dir,
        None => default_base_dir()?,
    };

    let player = PlayerLibrary::open_named(&base_dir, &cli.lib_name)?;

    match cli.command.unwrap_or(Command::Check { a: 3, b: 4 }) {
        Command::Check { a, b } => {
            let result = player.add(a, b)?;
            println!("{a} + {b} = {result}");
        }
        Command::Play { file, verbose } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let status = player.play_list(&json, verbose)?;
            if status != 0 {
                anyhow::bail!("player returned status {status}");
            }
            println!("playback finished (status {status})");
        }
    }

    Ok(())
}

/// Directory of the running executable. Library resolution is anchored
/// here, never at the process working directory.
fn default_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to get current executable path")?;
    let dir = exe
        .parent()
        .context("executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}
