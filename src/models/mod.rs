pub mod bounds;
pub mod reading;
pub mod scale;
pub mod station;
pub mod table;

pub use bounds::MapBounds;
pub use reading::{Reading, TIMESTAMP_FORMAT};
pub use scale::{AqiCategory, AqiScale};
pub use station::Station;
pub use table::ReadingTable;
