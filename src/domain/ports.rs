use crate::domain::model::{Person, RosterSummary};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Destination for the rendered report (console in the binary, an in-memory
/// buffer in tests).
pub trait ReportSink {
    fn write_report(&self, report: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn fib_count(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Person>>;
    fn transform(&self, roster: Vec<Person>) -> Result<RosterSummary>;
    fn load(&self, summary: RosterSummary) -> Result<String>;
}
