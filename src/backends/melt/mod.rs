//! # melt Backend
//!
//! Drives the MLT framework's `melt` tool for edits and playback. melt has
//! no clean duration query, so probing shells out to `ffmpeg` and reads the
//! `Duration:` line from its banner.

mod invocation;

pub use invocation::MeltBackend;

/// Frame rate of melt's default PAL profile, used to convert fade seconds
/// into `-mix` frame counts.
pub const PROFILE_FPS: u64 = 25;
