pub mod distribution;
pub mod draft;
pub mod history_point;
pub mod holding;
pub mod holding_metrics;
pub mod price_entry;
pub mod snapshot;

pub use distribution::DistributionEntry;
pub use draft::{DraftField, HoldingDraft};
pub use history_point::HistoryPoint;
pub use holding::Holding;
pub use holding_metrics::{HoldingMetrics, HoldingRow};
pub use price_entry::{PriceBook, PriceEntry};
pub use snapshot::PortfolioSnapshot;
