pub mod animator;
pub mod colorbar;
pub mod frame_renderer;

pub use animator::{count_animation_frames, AnimationOutcome, Animator};
pub use colorbar::{draw_colorbar, ColorbarLayout};
pub use frame_renderer::{frame_title, FrameRenderer};
