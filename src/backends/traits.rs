use std::path::{Path, PathBuf};

use which::which;

use crate::error::{BackendError, Result};

/// Core trait that every media backend must implement
///
/// A backend owns the actual encode/decode/transcode/playback work by
/// driving external tools; the dispatcher only ever talks to this trait.
/// Implementations must not create or modify files other than the requested
/// outputs and their own temporary intermediates.
pub trait Backend: Send + Sync {
    /// Returns the unique name of this backend
    fn name(&self) -> &str;

    /// Returns a human-readable description of this backend
    fn description(&self) -> &str;

    /// The executables this backend needs, as configured names or paths
    fn required_tools(&self) -> Vec<String>;

    /// Check that every required tool can be found
    ///
    /// Called once at startup; a missing tool is fatal. The default
    /// implementation resolves each tool with `which`, which also accepts
    /// explicit paths from the configuration.
    fn probe(&self) -> Result<()> {
        for tool in self.required_tools() {
            which(&tool).map_err(|_| BackendError::Unavailable { tool: tool.clone() })?;
        }
        Ok(())
    }

    /// Extract `[start_secs, end_secs)` of `input` into `output`
    fn trim(&self, input: &Path, start_secs: u64, end_secs: u64, output: &Path) -> Result<()>;

    /// Join `inputs` in order into `output`
    ///
    /// Callers guarantee at least one input. Inputs are joined exactly in
    /// slice order.
    fn concat(&self, inputs: &[PathBuf], output: &Path) -> Result<()>;

    /// Replace the audio track of `video` with `audio`, writing `output`
    fn add_audio(&self, video: &Path, audio: &Path, output: &Path) -> Result<()>;

    /// Fade out the tail of `first`, fade in the head of `second`, and join
    /// them into `output`. A zero-second fade is a plain concatenation.
    fn crossfade(&self, first: &Path, second: &Path, fade_secs: u64, output: &Path) -> Result<()>;

    /// Probe the duration of `input` in seconds
    fn duration(&self, input: &Path) -> Result<f64>;

    /// Render `input` for local playback, blocking until playback ends
    fn play(&self, input: &Path) -> Result<()>;
}
