//! # Media Backend System
//!
//! All real media work (encode, decode, transcode, playback) is delegated to
//! external tools behind the [`Backend`] trait. The dispatcher never touches
//! codecs or containers itself.
//!
//! ## Built-in Backends
//!
//! - **ffmpeg**: the ffmpeg command-line family (`ffmpeg`, `ffprobe`, `ffplay`)
//! - **melt**: the MLT framework's `melt` tool
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reelcut::backends::BackendRegistry;
//! use reelcut::config::Config;
//!
//! let config = Config::default();
//! let registry = BackendRegistry::new();
//! let backend = registry.get_backend("ffmpeg", &config).unwrap();
//! backend.probe().expect("tools on PATH");
//! ```

pub mod registry;
pub mod runner;
pub mod traits;

// Backend implementations
pub mod ffmpeg;
pub mod melt;

// Re-exports for convenience
pub use registry::BackendRegistry;
pub use runner::{CommandOutput, CommandRunner};
pub use traits::Backend;

// Re-export all built-in backends
pub use ffmpeg::FfmpegBackend;
pub use melt::MeltBackend;
