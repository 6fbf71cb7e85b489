use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::backends::Backend;
use crate::config::Config;
use crate::dispatch::types::{
    part_output_path, scan_media_folder, split_plan, Operation, MEDIA_EXTENSIONS,
};
use crate::error::{BackendError, EditorError, MediaError, Result, TimecodeError};
use crate::timecode::parse_timecode;

/// The operation dispatcher
///
/// Validates referenced paths, converts timecodes to seconds, and invokes
/// the backend for exactly one [`Operation`] per run. Every handler checks
/// its own file arguments immediately before acting; a missing input
/// short-circuits without any backend call.
///
/// When a backend invocation fails, the entries of the working directory
/// are listed to stderr so the user can spot path mistakes. That directory
/// is injected through the configuration (tests point it at a fixture dir);
/// it defaults to the process working directory.
pub struct Editor {
    backend: Box<dyn Backend>,
    workdir: PathBuf,
}

impl Editor {
    /// Create an editor around the given backend
    pub fn new(config: &Config, backend: Box<dyn Backend>) -> Result<Self> {
        let workdir = match &config.general.diagnostics_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self { backend, workdir })
    }

    /// Execute one operation to completion
    pub fn execute(&self, operation: &Operation) -> Result<()> {
        let result = self.dispatch(operation);
        if let Err(EditorError::Backend(BackendError::Invocation { .. })) = &result {
            self.list_workdir();
        }
        result
    }

    fn dispatch(&self, operation: &Operation) -> Result<()> {
        match operation {
            Operation::Trim {
                input,
                start,
                end,
                output,
            } => self.trim(input, start, end, output),
            Operation::Concat {
                first,
                second,
                output,
            } => self.concat(first, second, output),
            Operation::ConcatFolder { folder, output } => self.concat_folder(folder, output),
            Operation::AddAudio {
                video,
                audio,
                output,
            } => self.add_audio(video, audio, output),
            Operation::Fade {
                first,
                second,
                output,
                fade_secs,
            } => self.fade(first, second, output, *fade_secs),
            Operation::Split { input, chunk } => self.split(input, chunk),
            Operation::Play { input } => self.play(input),
            Operation::PlayFolder { folder } => self.play_folder(folder),
        }
    }

    fn trim(&self, input: &Path, start: &str, end: &str, output: &Path) -> Result<()> {
        self.require_file(input)?;
        let start_secs = parse_timecode(start)?;
        let end_secs = parse_timecode(end)?;

        debug!(
            "trim {} [{start_secs}s, {end_secs}s) -> {}",
            input.display(),
            output.display()
        );
        self.backend.trim(input, start_secs, end_secs, output)?;
        info!("Trimmed video saved as {}", output.display());
        Ok(())
    }

    fn concat(&self, first: &Path, second: &Path, output: &Path) -> Result<()> {
        self.require_file(first)?;
        self.require_file(second)?;

        self.backend
            .concat(&[first.to_path_buf(), second.to_path_buf()], output)?;
        info!("Concatenated video saved as {}", output.display());
        Ok(())
    }

    fn concat_folder(&self, folder: &Path, output: &Path) -> Result<()> {
        let files = self.require_folder_videos(folder)?;

        info!("Joining {} videos from {}", files.len(), folder.display());
        self.backend.concat(&files, output)?;
        info!("Concatenated video saved as {}", output.display());
        Ok(())
    }

    fn add_audio(&self, video: &Path, audio: &Path, output: &Path) -> Result<()> {
        self.require_file(video)?;
        self.require_file(audio)?;

        self.backend.add_audio(video, audio, output)?;
        info!("Video with new audio saved as {}", output.display());
        Ok(())
    }

    fn fade(&self, first: &Path, second: &Path, output: &Path, fade_secs: u64) -> Result<()> {
        self.require_file(first)?;
        self.require_file(second)?;

        self.backend.crossfade(first, second, fade_secs, output)?;
        info!("Faded video saved as {}", output.display());
        Ok(())
    }

    fn split(&self, input: &Path, chunk: &str) -> Result<()> {
        self.require_file(input)?;
        let chunk_secs = parse_timecode(chunk)?;
        if chunk_secs == 0 {
            return Err(TimecodeError::ZeroDuration {
                value: chunk.to_string(),
            }
            .into());
        }

        let total_secs = self.backend.duration(input)?;
        let plan = split_plan(total_secs, chunk_secs);
        debug!(
            "split {} ({total_secs:.2}s) into {} parts of {chunk_secs}s",
            input.display(),
            plan.len()
        );

        for (index, (start_secs, end_secs)) in plan.iter().enumerate() {
            let part = part_output_path(input, index + 1)?;
            self.backend.trim(input, *start_secs, *end_secs, &part)?;
            info!("Created {}", part.display());
        }
        Ok(())
    }

    fn play(&self, input: &Path) -> Result<()> {
        self.require_file(input)?;
        self.backend.play(input)
    }

    fn play_folder(&self, folder: &Path) -> Result<()> {
        let files = self.require_folder_videos(folder)?;

        for file in &files {
            info!("Playing {}", file.display());
            self.backend.play(file)?;
        }
        Ok(())
    }

    /// Existence is checked immediately before use, never cached
    fn require_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(MediaError::MissingFile {
                path: path.display().to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Folder must exist and contain at least one recognized video
    fn require_folder_videos(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        if !folder.is_dir() {
            return Err(MediaError::MissingFile {
                path: folder.display().to_string(),
            }
            .into());
        }

        let files = scan_media_folder(folder)?;
        if files.is_empty() {
            return Err(MediaError::EmptyFolder {
                path: folder.display().to_string(),
                extensions: MEDIA_EXTENSIONS.join(", "),
            }
            .into());
        }
        Ok(files)
    }

    fn list_workdir(&self) {
        eprintln!("Files in {}:", self.workdir.display());
        match std::fs::read_dir(&self.workdir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    eprintln!("  {}", entry.file_name().to_string_lossy());
                }
            }
            Err(err) => eprintln!("  (could not list directory: {err})"),
        }
    }
}
