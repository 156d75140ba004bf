pub mod cli;
pub mod config;
pub mod error;
pub mod generators;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod render;
pub mod utils;
pub mod writers;

pub use crate::config::PipelineConfig;
pub use error::{AqiError, Result};
pub use pipeline::{Pipeline, PipelineSummary};
