pub mod table_assembler;
pub mod table_checker;
pub mod timestamp_selector;

pub use table_assembler::TableAssembler;
pub use table_checker::{OrderingViolation, StationStatistics, TableChecker, TableReport};
pub use timestamp_selector::TimestampSelector;
