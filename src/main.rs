use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use reelcut::{
    backends::BackendRegistry,
    config::Config,
    dispatch::{Editor, Operation},
    error::ConfigError,
};

#[derive(Parser)]
#[command(
    name = "reelcut",
    version,
    about = "Trim, concatenate, fade, split and play videos",
    long_about = "reelcut edits videos by driving an external media backend (ffmpeg or melt): \
                  trimming, concatenation, crossfades, audio replacement, splitting into parts, \
                  and local playback."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Media backend to use, overriding the configuration (ffmpeg, melt)
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Trim a video from start time to end time
    Trim {
        /// The file to process
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// Start time in HH:MM:SS or MM:SS format
        #[arg(short = 's', long)]
        start: String,

        /// End time in HH:MM:SS or MM:SS format
        #[arg(short = 'e', long)]
        end: String,

        /// The output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Concatenate two videos
    Concat {
        /// The first file to join
        #[arg(long)]
        f1: PathBuf,

        /// The second file to join
        #[arg(long)]
        f2: PathBuf,

        /// The output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Replace the audio track of a video
    #[command(name = "add_audio")]
    AddAudio {
        /// The video file to process
        #[arg(short = 'v', long)]
        video: PathBuf,

        /// The audio file to add
        #[arg(short = 'a', long)]
        audio: PathBuf,

        /// The output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Fade one video into another
    Fade {
        /// The first file, faded out at its tail
        #[arg(long)]
        f1: PathBuf,

        /// The second file, faded in at its head
        #[arg(long)]
        f2: PathBuf,

        /// The output file
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Duration of the fade effect in seconds
        #[arg(short = 'd', long, default_value_t = 1)]
        duration: u64,
    },

    /// Play a video
    Play {
        /// The file to play
        #[arg(short = 'f', long)]
        file: PathBuf,
    },

    /// Split a video into consecutive parts
    Split {
        /// The file to process
        file: PathBuf,

        /// Duration of each part in HH:MM:SS or MM:SS format
        duration: String,
    },

    /// Concatenate every video in a folder, in name order
    #[command(name = "concatenate_videos_in_folder")]
    ConcatenateVideosInFolder {
        /// Folder containing the videos
        #[arg(short = 'd', long)]
        folder: PathBuf,

        /// The output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Play every video in a folder, in name order
    #[command(name = "play_all_videos_in_folder")]
    PlayAllVideosInFolder {
        /// Folder containing the videos
        #[arg(short = 'd', long)]
        folder: PathBuf,
    },
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::Trim {
                file,
                start,
                end,
                output,
            } => Operation::Trim {
                input: file,
                start,
                end,
                output,
            },
            Command::Concat { f1, f2, output } => Operation::Concat {
                first: f1,
                second: f2,
                output,
            },
            Command::AddAudio {
                video,
                audio,
                output,
            } => Operation::AddAudio {
                video,
                audio,
                output,
            },
            Command::Fade {
                f1,
                f2,
                output,
                duration,
            } => Operation::Fade {
                first: f1,
                second: f2,
                output,
                fade_secs: duration,
            },
            Command::Play { file } => Operation::Play { input: file },
            Command::Split { file, duration } => Operation::Split {
                input: file,
                chunk: duration,
            },
            Command::ConcatenateVideosInFolder { folder, output } => {
                Operation::ConcatFolder { folder, output }
            }
            Command::PlayAllVideosInFolder { folder } => Operation::PlayFolder { folder },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };
    if let Some(backend_name) = &cli.backend {
        config.general.backend = backend_name.clone();
    }
    config.validate()?;

    // Select the backend and check its tools once, up front
    let registry = BackendRegistry::new();
    let backend = registry
        .get_backend(&config.general.backend, &config)
        .ok_or_else(|| ConfigError::UnknownBackend {
            name: config.general.backend.clone(),
            available: registry.available_backends().join(", "),
        })?;
    backend.probe()?;

    info!("Using {} backend ({})", backend.name(), backend.description());

    let editor = Editor::new(&config, backend)?;
    editor.execute(&Operation::from(cli.command))?;
    Ok(())
}
