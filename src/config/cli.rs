use crate::core::ReportSink;
use crate::utils::error::Result;
use std::io::Write;

/// Writes the rendered report to standard output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleSink {
    fn write_report(&self, report: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", report)?;
        Ok(())
    }
}
