//! # reelcut
//!
//! Trim, concatenate, fade, split and play videos by driving external media
//! backends. reelcut is argument-parsing and subprocess glue by design: the
//! actual encode/decode/transcode work is delegated to `ffmpeg` or `melt`
//! behind a common [`Backend`](backends::Backend) trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reelcut::{BackendRegistry, Config, Editor, Operation};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let registry = BackendRegistry::new();
//! let backend = registry.get_backend(&config.general.backend, &config).unwrap();
//! backend.probe()?;
//!
//! let editor = Editor::new(&config, backend)?;
//! editor.execute(&Operation::Trim {
//!     input: "video.mp4".into(),
//!     start: "00:00:10".into(),
//!     end: "00:00:20".into(),
//!     output: "out.mp4".into(),
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`dispatch`] - operation model and the dispatcher
//! - [`backends`] - the backend trait, registry, and tool drivers
//! - [`timecode`] - `HH:MM:SS` / `MM:SS` conversions
//! - [`config`] - configuration management
//!
//! ## Adding a Backend
//!
//! Implement [`Backend`](backends::Backend) and register a factory with
//! [`BackendRegistry::register`](backends::BackendRegistry::register); the
//! dispatcher only ever talks to the trait.

pub mod backends;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod timecode;

// Re-export commonly used types for convenience
pub use crate::{
    backends::{Backend, BackendRegistry},
    config::Config,
    dispatch::{Editor, Operation},
    error::{EditorError, Result},
};
