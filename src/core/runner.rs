use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a [`Pipeline`] through extract, transform and load.
pub struct RecommendationRunner<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RecommendationRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting recommendation run");
        self.monitor.log_stats("Start");

        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} users and {} venues",
            data.participants.len(),
            data.venues.len()
        );
        self.monitor.log_stats("Extract");

        let report = self.pipeline.transform(data).await?;
        tracing::info!(
            "Recommended {} venues, {} to avoid",
            report.places_to_visit.len(),
            report.places_to_avoid.len()
        );
        self.monitor.log_stats("Transform");

        let rendered = self.pipeline.load(report).await?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(rendered)
    }
}
