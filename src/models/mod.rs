pub mod raw_row;
pub mod reason_code;
pub mod report;
pub mod summary;
pub mod validation_error;
pub mod work_entry;

pub use raw_row::RawRow;
pub use reason_code::ReasonCode;
pub use report::Report;
pub use summary::{DailySummaryRow, ProcessMinutes, ProcessSummaryRow};
pub use validation_error::ValidationError;
pub use work_entry::WorkEntry;
