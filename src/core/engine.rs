use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();

        // Extract
        tracing::info!("Extracting roster...");
        let roster = self.pipeline.extract()?;
        tracing::info!("Extracted {} people", roster.len());

        // Transform
        tracing::info!("Transforming roster...");
        let summary = self.pipeline.transform(roster)?;
        tracing::info!(
            "Transformed {} people into {} age groups",
            summary.total,
            summary.age_groups.len()
        );

        // Load
        tracing::info!("Loading report...");
        let report = self.pipeline.load(summary)?;

        tracing::debug!("Report pipeline finished in {:?}", started.elapsed());
        Ok(report)
    }
}
