pub mod state;
pub mod views;

pub use state::{ChartLoader, LoadOutcome, LoadState};
pub use views::ViewRegistry;
