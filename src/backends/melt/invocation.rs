use std::path::{Path, PathBuf};

use regex::Regex;

use crate::backends::melt::PROFILE_FPS;
use crate::backends::runner::CommandRunner;
use crate::backends::traits::Backend;
use crate::config::Config;
use crate::error::{BackendError, Result};
use crate::timecode::format_timecode;

/// Backend driving the MLT `melt` tool
///
/// melt renders through its avformat consumer for edits and its SDL
/// consumer for playback. Duration probing shells out to `ffmpeg` and
/// parses the banner, so this backend needs both executables.
pub struct MeltBackend {
    melt: String,
    ffmpeg: String,
    vcodec: String,
    acodec: String,
    runner: CommandRunner,
}

impl MeltBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            melt: config.tools.melt.clone(),
            ffmpeg: config.tools.ffmpeg.clone(),
            vcodec: config.encode.vcodec.clone(),
            acodec: config.encode.acodec.clone(),
            runner: CommandRunner::new(),
        }
    }

    fn consumer_args(&self, output: &Path) -> Vec<String> {
        vec![
            "-consumer".into(),
            format!("avformat:{}", output.display()),
            format!("acodec={}", self.acodec),
            format!("vcodec={}", self.vcodec),
        ]
    }
}

impl Backend for MeltBackend {
    fn name(&self) -> &str {
        "melt"
    }

    fn description(&self) -> &str {
        "MLT melt framework (ffmpeg for duration probing)"
    }

    fn required_tools(&self) -> Vec<String> {
        vec![self.melt.clone(), self.ffmpeg.clone()]
    }

    fn trim(&self, input: &Path, start_secs: u64, end_secs: u64, output: &Path) -> Result<()> {
        let mut args = vec![
            input.display().to_string(),
            format!("in={}", format_timecode(start_secs)),
            format!("out={}", format_timecode(end_secs)),
        ];
        args.extend(self.consumer_args(output));
        self.runner.run_checked(&self.melt, &args)?;
        Ok(())
    }

    fn concat(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let mut args: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
        args.extend(self.consumer_args(output));
        self.runner.run_checked(&self.melt, &args)?;
        Ok(())
    }

    fn add_audio(&self, video: &Path, audio: &Path, output: &Path) -> Result<()> {
        let mut args = vec![
            video.display().to_string(),
            "-audio-track".into(),
            audio.display().to_string(),
        ];
        args.extend(self.consumer_args(output));
        self.runner.run_checked(&self.melt, &args)?;
        Ok(())
    }

    fn crossfade(&self, first: &Path, second: &Path, fade_secs: u64, output: &Path) -> Result<()> {
        if fade_secs == 0 {
            return self.concat(&[first.to_path_buf(), second.to_path_buf()], output);
        }

        let mut args = crossfade_args(first, second, fade_secs);
        args.extend(self.consumer_args(output));
        self.runner.run_checked(&self.melt, &args)?;
        Ok(())
    }

    fn duration(&self, input: &Path) -> Result<f64> {
        // ffmpeg prints the container duration on stderr even when the null
        // run itself is unhappy, so the exit status is ignored.
        let args = vec![
            "-i".into(),
            input.display().to_string(),
            "-f".into(),
            "null".into(),
            "-".into(),
        ];
        let output = self.runner.run(&self.ffmpeg, &args)?;

        parse_banner_duration(&output.stderr).ok_or_else(|| {
            BackendError::Invocation {
                tool: self.ffmpeg.clone(),
                detail: format!("could not read duration of {}", input.display()),
            }
            .into()
        })
    }

    fn play(&self, input: &Path) -> Result<()> {
        self.runner
            .run_interactive(&self.melt, &[input.display().to_string()])?;
        Ok(())
    }
}

/// Producers plus a luma mix transition over the overlap
fn crossfade_args(first: &Path, second: &Path, fade_secs: u64) -> Vec<String> {
    let frames = fade_secs * PROFILE_FPS;
    vec![
        first.display().to_string(),
        second.display().to_string(),
        "-mix".into(),
        frames.to_string(),
        "-mixer".into(),
        "luma".into(),
        "-mixer".into(),
        "mix:-1".into(),
    ]
}

/// Pull `Duration: HH:MM:SS.cc` out of an ffmpeg stderr banner
fn parse_banner_duration(stderr: &str) -> Option<f64> {
    let pattern = Regex::new(r"Duration: (\d+):(\d+):(\d+)\.(\d+)").ok()?;
    let captures = pattern.captures(stderr)?;

    let hours: f64 = captures[1].parse().ok()?;
    let minutes: f64 = captures[2].parse().ok()?;
    let seconds: f64 = captures[3].parse().ok()?;
    let centis: f64 = captures[4].parse().ok()?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds + centis / 100.0)
}
