//! # ffmpeg Backend
//!
//! Drives the ffmpeg command-line family: `ffmpeg` for edits, `ffprobe` for
//! duration probing, `ffplay` for playback. Edit operations stream-copy
//! where possible; fades re-encode with the configured codecs.

mod invocation;

pub use invocation::FfmpegBackend;
