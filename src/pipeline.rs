use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::generators::SyntheticGenerator;
use crate::models::{AqiScale, ReadingTable};
use crate::processors::{TableAssembler, TimestampSelector};
use crate::render::{AnimationOutcome, Animator, FrameRenderer};
use crate::utils::progress::ProgressReporter;

#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub days: usize,
    pub rows: usize,
    pub selected_timestamps: usize,
    pub frames: Vec<PathBuf>,
    pub outcome: AnimationOutcome,
}

/// generate -> assemble -> select -> render -> animate, strictly in sequence
pub struct Pipeline {
    config: PipelineConfig,
    scale: AqiScale,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate_all()?;
        Ok(Self {
            config,
            scale: AqiScale::standard(),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn scale(&self) -> &AqiScale {
        &self.scale
    }

    /// Synthetic readings for the configured range, assembled and sorted
    pub fn build_table(&self, progress: Option<&ProgressReporter>) -> ReadingTable {
        let range = self.config.date_range();
        if range.is_empty() {
            warn!(
                start = %range.start(),
                end = %range.end(),
                "end date precedes start date, no readings will be generated"
            );
        }

        let generator = SyntheticGenerator::new(self.config.stations.clone());
        let batches = generator.generate_range(range, progress);
        TableAssembler::new().assemble(batches)
    }

    pub fn select_timestamps(&self, table: &ReadingTable) -> Vec<NaiveDateTime> {
        TimestampSelector::new()
            .with_hour(self.config.selection_hour)
            .with_fallback_stride(self.config.fallback_stride)
            .select(table)
    }

    /// Render one frame per selected timestamp into the frames directory.
    /// Timestamps without readings are skipped.
    pub fn render_frames(
        &self,
        table: &ReadingTable,
        timestamps: &[NaiveDateTime],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.config.frames_dir)?;

        let renderer = FrameRenderer::new(self.scale.clone())
            .with_size(self.config.frame_width, self.config.frame_height);
        let silent = progress.map_or(true, ProgressReporter::is_silent);
        let bar = ProgressReporter::new_bar(timestamps.len() as u64, "Rendering frames...", silent);

        let mut frames = Vec::with_capacity(timestamps.len());
        for (index, timestamp) in timestamps.iter().enumerate() {
            let readings = table.readings_at(*timestamp);
            if let Some(path) =
                renderer.render(index, *timestamp, readings, &self.config.frames_dir)?
            {
                frames.push(path);
            }
            bar.increment(1);
        }

        bar.finish_with_message(&format!("Rendered {} frames", frames.len()));
        info!(
            frames = frames.len(),
            dir = %self.config.frames_dir.display(),
            "rendered frames"
        );

        Ok(frames)
    }

    pub fn animate(&self, frames: &[PathBuf]) -> Result<AnimationOutcome> {
        Animator::with_fps(self.config.fps)?.animate(frames, &self.config.animation_path)
    }

    pub fn run(&self, progress: Option<&ProgressReporter>) -> Result<PipelineSummary> {
        info!(
            start = %self.config.start_date,
            end = %self.config.end_date,
            stations = self.config.stations.len(),
            "starting pipeline"
        );

        let table = self.build_table(progress);
        let timestamps = self.select_timestamps(&table);
        let frames = self.render_frames(&table, &timestamps, progress)?;
        let outcome = self.animate(&frames)?;

        Ok(PipelineSummary {
            days: self.config.date_range().days(),
            rows: table.len(),
            selected_timestamps: timestamps.len(),
            frames,
            outcome,
        })
    }
}
