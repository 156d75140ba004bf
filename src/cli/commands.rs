use crate::cli::args::{Cli, Commands};
use crate::config::{parse_date, PipelineConfig};
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::processors::TableChecker;
use crate::render::{count_animation_frames, AnimationOutcome, Animator};
use crate::utils::filename::list_frame_files;
use crate::utils::progress::ProgressReporter;
use crate::writers::TableWriter;

fn apply_dates(
    config: &mut PipelineConfig,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<()> {
    if let Some(start) = start_date {
        config.start_date = parse_date(&start)?;
    }
    if let Some(end) = end_date {
        config.end_date = parse_date(&end)?;
    }
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Animate {
        start_date: None,
        end_date: None,
        frames_dir: None,
        output: None,
        fps: None,
    });

    match command {
        Commands::Animate {
            start_date,
            end_date,
            frames_dir,
            output,
            fps,
        } => {
            let mut config = PipelineConfig::load(cli.config.as_deref())?;
            apply_dates(&mut config, start_date, end_date)?;
            if let Some(dir) = frames_dir {
                config.frames_dir = dir;
            }
            if let Some(path) = output {
                config.animation_path = path;
            }
            if let Some(fps) = fps {
                config.fps = fps;
            }

            println!(
                "Generating AQI animation for {} to {}",
                config.start_date, config.end_date
            );
            println!("Frames directory: {}", config.frames_dir.display());

            let pipeline = Pipeline::new(config)?;
            let progress = ProgressReporter::lines();
            let summary = pipeline.run(Some(&progress))?;

            println!(
                "Generated {} readings over {} days, {} timestamps selected",
                summary.rows, summary.days, summary.selected_timestamps
            );
            println!("{}", summary.outcome.summary());
        }

        Commands::Generate {
            start_date,
            end_date,
            output,
            format,
        } => {
            let mut config = PipelineConfig::load(cli.config.as_deref())?;
            apply_dates(&mut config, start_date, end_date)?;
            let writer = TableWriter::new().with_format(&format)?;

            let pipeline = Pipeline::new(config)?;
            let progress = ProgressReporter::lines();
            let table = pipeline.build_table(Some(&progress));

            let checker = TableChecker::with_expected_rows(pipeline.config().expected_rows());
            let report = checker.check(&table, pipeline.scale());
            println!("\n{}", checker.generate_summary(&report));

            if let Some(path) = output {
                if table.is_empty() {
                    println!("No readings to write");
                    return Ok(());
                }
                writer.write_table(&table, &path)?;
                println!("Wrote {} readings to {}", table.len(), path.display());
            }
        }

        Commands::Stitch {
            frames_dir,
            output,
            fps,
        } => {
            let frames = list_frame_files(&frames_dir)?;
            println!(
                "Found {} frames in {}",
                frames.len(),
                frames_dir.display()
            );

            let outcome = Animator::with_fps(fps)?.animate(&frames, &output)?;
            println!("{}", outcome.summary());
        }

        Commands::Info { file } => {
            println!("Analyzing animation file: {}", file.display());

            let frame_count = count_animation_frames(&file)?;
            let file_size = std::fs::metadata(&file)?.len();
            let outcome = AnimationOutcome::Written {
                path: file,
                frame_count,
            };

            println!("{}", outcome.summary());
            println!("File size: {:.2} MB", file_size as f64 / 1_048_576.0);
        }
    }

    Ok(())
}
