use std::path::{Path, PathBuf};

use crate::utils::constants::{FRAME_FILE_EXTENSION, FRAME_FILE_PREFIX};

/// Frame file name with a zero-padded index, e.g. `aqi_frame_0007.png`.
/// Four digits keep lexical order equal to index order up to 10 000 frames.
pub fn frame_file_name(index: usize) -> String {
    format!("{}{:04}.{}", FRAME_FILE_PREFIX, index, FRAME_FILE_EXTENSION)
}

pub fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(frame_file_name(index))
}

/// Frame images already present in `dir`, in lexical (= playback) order
pub fn list_frame_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut frames: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| {
                    n.starts_with(FRAME_FILE_PREFIX)
                        && n.ends_with(&format!(".{}", FRAME_FILE_EXTENSION))
                })
                .unwrap_or(false)
        })
        .collect();
    frames.sort();
    Ok(frames)
}
