pub mod status;

pub use status::{CheckProcessQuery, ProcessStatus, RunningList};
