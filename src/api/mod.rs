pub mod base;
pub mod dto;
pub mod file;
pub mod history;
pub mod mock;

pub use base::PriceSource;
pub use file::FilePriceSource;
pub use history::{HistorySource, MAX_HISTORY_DAYS, RandomWalkHistory};
pub use mock::MockPriceSource;
