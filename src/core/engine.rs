use crate::core::{CountReport, Pipeline};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: CountReport,
    /// Output path, or `stdout`.
    pub destination: String,
}

pub struct CountEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CountEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting letter count");

        // Extract
        let source = self.pipeline.extract().await?;
        tracing::info!("Read input from {}", source.origin);

        // Transform
        let report = self.pipeline.transform(source).await?;
        tracing::info!(
            "Counted {} letters ({} distinct)",
            report.total_letters,
            report.distinct_letters
        );
        tracing::debug!("Counts: {}", report.counts);

        // Load
        let destination = self.pipeline.load(&report).await?;
        tracing::info!("Result written to {}", destination);

        Ok(RunOutcome {
            report,
            destination,
        })
    }
}
