pub mod allow_list;
pub mod dataset;
pub mod filter;
pub mod validation;

pub use dataset::{Dataset, DatasetError};
pub use filter::FilterOutcome;
pub use validation::ValidationError;
