pub mod engine;
pub mod fibonacci;
pub mod pipeline;

pub use crate::domain::model::{AgeBucket, Person, RosterSummary};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, ReportSink};
pub use crate::utils::error::Result;
