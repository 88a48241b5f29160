//! Session-local analysis history and the derived trend view.
//!
//! Nothing here is persisted: a [`Session`] lives as long as its owner.

mod analysis;
mod history;
mod trend;

pub use analysis::{Analysis, AnalysisSource};
pub use history::{Session, SessionSummary};
pub use trend::{daily_trend, TrendPoint, TREND_DAYS};
