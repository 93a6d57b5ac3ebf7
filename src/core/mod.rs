//! Validation, normalization and aggregation of work-log rows.
//! Nothing in here touches the filesystem.

pub mod aggregator;
pub mod checks;
pub mod options;
pub mod parser;
pub mod pipeline;

pub use aggregator::{Aggregator, aggregate};
pub use options::{ParseOptions, TimePrecedence};
pub use parser::parse_row;
pub use pipeline::{BuildOutcome, Partition, Pipeline};
