use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::backends::runner::CommandRunner;
use crate::backends::traits::Backend;
use crate::config::Config;
use crate::error::{BackendError, Result};
use crate::timecode::format_timecode;

/// Backend driving `ffmpeg`, `ffprobe` and `ffplay`
pub struct FfmpegBackend {
    ffmpeg: String,
    ffprobe: String,
    ffplay: String,
    vcodec: String,
    acodec: String,
    runner: CommandRunner,
}

impl FfmpegBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            ffmpeg: config.tools.ffmpeg.clone(),
            ffprobe: config.tools.ffprobe.clone(),
            ffplay: config.tools.ffplay.clone(),
            vcodec: config.encode.vcodec.clone(),
            acodec: config.encode.acodec.clone(),
            runner: CommandRunner::new(),
        }
    }
}

impl Backend for FfmpegBackend {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn description(&self) -> &str {
        "ffmpeg command-line tools (ffmpeg, ffprobe, ffplay)"
    }

    fn required_tools(&self) -> Vec<String> {
        vec![
            self.ffmpeg.clone(),
            self.ffprobe.clone(),
            self.ffplay.clone(),
        ]
    }

    fn trim(&self, input: &Path, start_secs: u64, end_secs: u64, output: &Path) -> Result<()> {
        self.runner
            .run_checked(&self.ffmpeg, &trim_args(input, start_secs, end_secs, output))?;
        Ok(())
    }

    fn concat(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let manifest = ConcatManifest::create(inputs)?;
        self.runner
            .run_checked(&self.ffmpeg, &concat_args(manifest.path(), output))?;
        Ok(())
        // manifest drops here, success or failure, removing the list file
    }

    fn add_audio(&self, video: &Path, audio: &Path, output: &Path) -> Result<()> {
        self.runner
            .run_checked(&self.ffmpeg, &add_audio_args(video, audio, &self.acodec, output))?;
        Ok(())
    }

    fn crossfade(&self, first: &Path, second: &Path, fade_secs: u64, output: &Path) -> Result<()> {
        if fade_secs == 0 {
            return self.concat(&[first.to_path_buf(), second.to_path_buf()], output);
        }

        let fade = fade_secs as f64;
        let fade_start = (self.duration(first)? - fade).max(0.0);

        // Intermediates live in a scratch dir that drops on every exit path.
        let workspace = tempfile::Builder::new().prefix("reelcut-fade-").tempdir()?;
        let tail = workspace.path().join("fade_tail.mp4");
        let head = workspace.path().join("fade_head.mp4");

        self.runner.run_checked(
            &self.ffmpeg,
            &fade_tail_args(first, fade_start, fade, &self.vcodec, &self.acodec, &tail),
        )?;
        self.runner.run_checked(
            &self.ffmpeg,
            &fade_head_args(second, fade, &self.vcodec, &self.acodec, &head),
        )?;

        self.concat(&[tail, head], output)
    }

    fn duration(&self, input: &Path) -> Result<f64> {
        let output = self.runner.run_checked(&self.ffprobe, &probe_args(input))?;
        let value = output.stdout.trim();
        value.parse::<f64>().map_err(|_| {
            BackendError::Invocation {
                tool: self.ffprobe.clone(),
                detail: format!("unparseable duration '{}' for {}", value, input.display()),
            }
            .into()
        })
    }

    fn play(&self, input: &Path) -> Result<()> {
        self.runner.run_interactive(&self.ffplay, &play_args(input))?;
        Ok(())
    }
}

/// Temporary concat-demuxer list file
///
/// The demuxer resolves relative entries against the list file's own
/// directory, so entries are written as absolute paths. The file is removed
/// when this value drops.
struct ConcatManifest {
    file: NamedTempFile,
}

impl ConcatManifest {
    fn create(inputs: &[PathBuf]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("reelcut-concat-")
            .suffix(".txt")
            .tempfile()?;

        for input in inputs {
            let absolute = fs::canonicalize(input)?;
            writeln!(file, "file '{}'", escape_entry(&absolute))?;
        }
        file.flush()?;

        Ok(Self { file })
    }

    fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Concat-demuxer quoting: a single quote ends the string, so `'` becomes
/// `'\''`.
fn escape_entry(path: &Path) -> String {
    path.display().to_string().replace('\'', r"'\''")
}

fn trim_args(input: &Path, start_secs: u64, end_secs: u64, output: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-i".into(),
        input.display().to_string(),
        "-ss".into(),
        format_timecode(start_secs),
        "-to".into(),
        format_timecode(end_secs),
        "-c".into(),
        "copy".into(),
        output.display().to_string(),
    ]
}

fn concat_args(manifest: &Path, output: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-f".into(),
        "concat".into(),
        "-safe".into(),
        "0".into(),
        "-i".into(),
        manifest.display().to_string(),
        "-c".into(),
        "copy".into(),
        output.display().to_string(),
    ]
}

fn add_audio_args(video: &Path, audio: &Path, acodec: &str, output: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-i".into(),
        video.display().to_string(),
        "-i".into(),
        audio.display().to_string(),
        "-map".into(),
        "0:v".into(),
        "-map".into(),
        "1:a".into(),
        "-c:v".into(),
        "copy".into(),
        "-c:a".into(),
        acodec.to_string(),
        "-shortest".into(),
        output.display().to_string(),
    ]
}

fn fade_tail_args(
    input: &Path,
    fade_start: f64,
    fade: f64,
    vcodec: &str,
    acodec: &str,
    output: &Path,
) -> Vec<String> {
    vec![
        "-y".into(),
        "-i".into(),
        input.display().to_string(),
        "-vf".into(),
        format!("fade=t=out:st={fade_start}:d={fade}"),
        "-af".into(),
        format!("afade=t=out:st={fade_start}:d={fade}"),
        "-c:v".into(),
        vcodec.to_string(),
        "-c:a".into(),
        acodec.to_string(),
        output.display().to_string(),
    ]
}

fn fade_head_args(input: &Path, fade: f64, vcodec: &str, acodec: &str, output: &Path) -> Vec<String> {
    vec![
        "-y".into(),
        "-i".into(),
        input.display().to_string(),
        "-vf".into(),
        format!("fade=t=in:st=0:d={fade}"),
        "-af".into(),
        format!("afade=t=in:st=0:d={fade}"),
        "-c:v".into(),
        vcodec.to_string(),
        "-c:a".into(),
        acodec.to_string(),
        output.display().to_string(),
    ]
}

fn probe_args(input: &Path) -> Vec<String> {
    vec![
        "-v".into(),
        "error".into(),
        "-show_entries".into(),
        "format=duration".into(),
        "-of".into(),
        "default=noprint_wrappers=1:nokey=1".into(),
        input.display().to_string(),
    ]
}

fn play_args(input: &Path) -> Vec<String> {
    vec!["-autoexit".into(), input.display().to_string()]
}
