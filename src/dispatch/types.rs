use std::path::{Path, PathBuf};

use crate::error::{MediaError, Result};

/// File extensions treated as video when scanning folders
pub const MEDIA_EXTENSIONS: [&str; 3] = ["mp4", "avi", "mov"];

/// A single media operation
///
/// Constructed from parsed command-line input, executed exactly once against
/// the backend, and discarded. Timecodes stay in their user-facing string
/// form here; the dispatcher converts them after the referenced files have
/// been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Extract `[start, end)` of `input` into `output`
    Trim {
        input: PathBuf,
        start: String,
        end: String,
        output: PathBuf,
    },
    /// Join two videos in order
    Concat {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },
    /// Join every recognized video in a folder, in name order
    ConcatFolder { folder: PathBuf, output: PathBuf },
    /// Replace the audio track of a video
    AddAudio {
        video: PathBuf,
        audio: PathBuf,
        output: PathBuf,
    },
    /// Fade the first video out, the second in, and join them
    Fade {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
        fade_secs: u64,
    },
    /// Partition a video into consecutive chunks
    Split { input: PathBuf, chunk: String },
    /// Play a single video
    Play { input: PathBuf },
    /// Play every recognized video in a folder, in name order
    PlayFolder { folder: PathBuf },
}

/// Recognized videos in `folder`, sorted by file name
///
/// Raw `read_dir` order is filesystem-dependent, so matches are sorted to
/// keep concatenation and playback order deterministic.
pub fn scan_media_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && has_media_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_media_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MEDIA_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Consecutive `[start, end)` second windows covering a video
///
/// A 95 second video split by 30 yields windows ending at 30, 60, 90 and 95;
/// the last window may be shorter than the chunk. A zero chunk yields no
/// windows; callers reject it before planning.
pub fn split_plan(total_secs: f64, chunk_secs: u64) -> Vec<(u64, u64)> {
    let total = total_secs as u64;
    let mut plan = Vec::new();
    if chunk_secs == 0 {
        return plan;
    }

    let mut start = 0;
    while start < total {
        plan.push((start, (start + chunk_secs).min(total)));
        start += chunk_secs;
    }
    plan
}

/// Output path for a 1-based split part: `{stem}_part{index}.mp4`, beside
/// the input
pub fn part_output_path(input: &Path, index: usize) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| MediaError::UnusablePath {
            path: input.display().to_string(),
        })?;
    Ok(input.with_file_name(format!("{stem}_part{index}.mp4")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn split_plan_covers_with_short_tail() {
        assert_eq!(
            split_plan(95.0, 30),
            vec![(0, 30), (30, 60), (60, 90), (90, 95)]
        );
    }

    #[test]
    fn split_plan_exact_multiple_has_no_tail() {
        assert_eq!(split_plan(90.0, 30), vec![(0, 30), (30, 60), (60, 90)]);
    }

    #[test]
    fn split_plan_part_count_is_ceiling() {
        for (total, chunk) in [(1u64, 30u64), (29, 30), (31, 30), (600, 7)] {
            let plan = split_plan(total as f64, chunk);
            let expected = total.div_ceil(chunk) as usize;
            assert_eq!(plan.len(), expected, "total={total} chunk={chunk}");
            // windows are consecutive and cover [0, total)
            assert_eq!(plan.first().unwrap().0, 0);
            assert_eq!(plan.last().unwrap().1, total);
            for pair in plan.windows(2) {
                assert_eq!(pair[0].1, pair[1].0);
            }
        }
    }

    #[test]
    fn split_plan_degenerate_inputs() {
        assert!(split_plan(0.0, 30).is_empty());
        assert!(split_plan(95.0, 0).is_empty());
    }

    #[test]
    fn part_output_path_is_numbered_beside_input() {
        let path = part_output_path(Path::new("/clips/holiday.mov"), 3).unwrap();
        assert_eq!(path, Path::new("/clips/holiday_part3.mp4"));
    }

    #[test]
    fn scan_finds_videos_sorted_by_name() {
        let dir = tempdir().unwrap();
        for name in ["b.mp4", "a.MOV", "c.avi", "notes.txt", "d.mkv"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("sub.mp4")).unwrap();

        let found = scan_media_folder(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.MOV", "b.mp4", "c.avi"]);
    }

    #[test]
    fn scan_missing_folder_is_an_error() {
        assert!(scan_media_folder(Path::new("/nonexistent-folder")).is_err());
    }
}
