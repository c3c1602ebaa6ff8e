pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::ConsoleSink, CliConfig};

pub use crate::core::{engine::ReportEngine, pipeline::RosterPipeline};
pub use crate::domain::model::{AgeBucket, Person, RosterSummary};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, ReportSink};
pub use crate::utils::error::{ReportError, Result};
