mod reader;

pub use reader::{Worklog, read_worklog, read_worklog_from};
