pub mod date_range;
pub mod synthetic;

pub use date_range::{DateRange, DateRangeIter};
pub use synthetic::{day_banner, dummy_aqi, stable_hash, SyntheticGenerator};
