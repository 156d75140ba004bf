pub mod constants;
pub mod filename;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use filename::{frame_file_name, frame_path, list_frame_files};
pub use logging::init_logging;
pub use progress::ProgressReporter;
