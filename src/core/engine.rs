use crate::core::{DuplicateSet, Pipeline};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs every stage and returns the duplicate set. Nothing is printed
    /// here, so a failure never leaves a partial report behind.
    pub fn run(&self) -> Result<DuplicateSet> {
        let start_time = Instant::now();
        tracing::info!("Starting duplicate name check");

        // Load
        let records = self.pipeline.load()?;

        // Extract
        let names = self.pipeline.extract_names(&records)?;
        tracing::debug!("Extracted {} names", names.len());

        // Count + filter
        let tally = self.pipeline.tally(&names);
        let duplicates = self.pipeline.find_duplicates(&tally);

        tracing::info!(
            "Duplicate name check completed in {:.1}ms",
            start_time.elapsed().as_secs_f64() * 1000.0
        );
        Ok(duplicates)
    }
}
