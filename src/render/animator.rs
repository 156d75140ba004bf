use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, Frame};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{AqiError, Result};
use crate::utils::constants::{DEFAULT_FPS, MAX_FPS};

/// NeuQuant sampling speed; 1 is slowest/best, 30 fastest
const GIF_ENCODER_SPEED: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationOutcome {
    Written { path: PathBuf, frame_count: usize },
    NothingToAnimate,
}

impl AnimationOutcome {
    pub fn frame_count(&self) -> usize {
        match self {
            AnimationOutcome::Written { frame_count, .. } => *frame_count,
            AnimationOutcome::NothingToAnimate => 0,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            AnimationOutcome::Written { path, frame_count } => {
                format!("GIF generated: {} ({} frames)", path.display(), frame_count)
            }
            AnimationOutcome::NothingToAnimate => "Nothing to animate: no frames were rendered".to_string(),
        }
    }
}

/// Stitches rendered frame images into a looping GIF
pub struct Animator {
    fps: u32,
}

impl Animator {
    pub fn new() -> Self {
        Self { fps: DEFAULT_FPS }
    }

    pub fn with_fps(fps: u32) -> Result<Self> {
        if !(1..=MAX_FPS).contains(&fps) {
            return Err(AqiError::Config(format!(
                "Animation frame rate must be between 1 and {} fps, got {}",
                MAX_FPS, fps
            )));
        }
        Ok(Self { fps })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frame_delay(&self) -> Delay {
        Delay::from_numer_denom_ms(1000, self.fps)
    }

    /// Decode `frame_paths` in order and encode them as an infinitely looping
    /// GIF at `output`. Reports `NothingToAnimate` for an empty list and
    /// leaves `output` untouched.
    pub fn animate(&self, frame_paths: &[PathBuf], output: &Path) -> Result<AnimationOutcome> {
        if frame_paths.is_empty() {
            warn!("no frames rendered, skipping animation");
            return Ok(AnimationOutcome::NothingToAnimate);
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(output)?);
        let mut encoder = GifEncoder::new_with_speed(writer, GIF_ENCODER_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;

        for path in frame_paths {
            let rgba = image::open(path)?.to_rgba8();
            encoder.encode_frame(Frame::from_parts(rgba, 0, 0, self.frame_delay()))?;
            debug!(frame = %path.display(), "encoded frame");
        }

        info!(
            path = %output.display(),
            frames = frame_paths.len(),
            fps = self.fps,
            "wrote animation"
        );

        Ok(AnimationOutcome::Written {
            path: output.to_path_buf(),
            frame_count: frame_paths.len(),
        })
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a GIF and count its frames
pub fn count_animation_frames(path: &Path) -> Result<usize> {
    let reader = BufReader::new(File::open(path)?);
    let decoder = GifDecoder::new(reader)?;

    decoder
        .into_frames()
        .try_fold(0usize, |count, frame| frame.map(|_| count + 1))
        .map_err(AqiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_frames(dir: &Path, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| {
                let shade = (i * 40) as u8;
                let img = RgbaImage::from_pixel(16, 16, Rgba([shade, 0, 255 - shade, 255]));
                let path = crate::utils::frame_path(dir, i);
                img.save(&path).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_nothing_to_animate() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.gif");

        let outcome = Animator::new().animate(&[], &output).unwrap();

        assert_eq!(outcome, AnimationOutcome::NothingToAnimate);
        assert_eq!(outcome.frame_count(), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_animation_round_trip_frame_count() {
        let dir = TempDir::new().unwrap();
        let frames = write_frames(dir.path(), 4);
        let output = dir.path().join("out.gif");

        let outcome = Animator::new().animate(&frames, &output).unwrap();

        assert_eq!(
            outcome,
            AnimationOutcome::Written {
                path: output.clone(),
                frame_count: 4
            }
        );
        assert_eq!(count_animation_frames(&output).unwrap(), 4);
    }

    #[test]
    fn test_frame_delay_matches_fps() {
        let animator = Animator::new();
        assert_eq!(animator.fps(), 5);
        let (numer, denom) = animator.frame_delay().numer_denom_ms();
        assert_eq!(numer as f64 / denom as f64, 200.0);

        assert!(Animator::with_fps(0).is_err());
        assert!(Animator::with_fps(51).is_err());
        assert!(Animator::with_fps(50).is_ok());
        assert_eq!(Animator::with_fps(10).unwrap().fps(), 10);
    }

    #[test]
    fn test_missing_frame_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.gif");
        let missing = vec![dir.path().join("aqi_frame_0000.png")];

        assert!(Animator::new().animate(&missing, &output).is_err());
    }
}
