use crate::adapters::http::{payload_to_table, PayloadCache, SourceFetcher};
use crate::core::{ConfigProvider, Entity, Pipeline, Report, SourceData, Storage};
use crate::domain::model::{ParticipantPreferences, VenueMenu};
use crate::domain::services::{aggregate_preferences, recommend, select_subset, CaseInsensitiveMap};
use crate::utils::error::Result;
use serde::Serialize;
use std::io;

pub const REPORT_FILE: &str = "report.json";

/// Renders the report the way it is printed: a one-element JSON array,
/// indented by four spaces.
pub fn render_report(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    [report].serialize(&mut serializer)?;
    let rendered = String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(rendered)
}

pub struct RecommendationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    participants: Vec<String>,
    fetcher: SourceFetcher,
}

impl<S: Storage, C: ConfigProvider> RecommendationPipeline<S, C> {
    pub fn new(storage: S, config: C, participants: Vec<String>) -> Self {
        Self {
            storage,
            config,
            participants,
            fetcher: SourceFetcher::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecommendationPipeline<S, C> {
    async fn extract(&self) -> Result<SourceData> {
        let mut cache = PayloadCache::new();
        let key = self.config.rearrange_key();

        let participants: CaseInsensitiveMap<ParticipantPreferences> = {
            let payload = self
                .fetcher
                .get_data(&self.config, Entity::Users, &mut cache)
                .await?;
            payload_to_table(Entity::Users, payload, key)?
        };
        let venues: CaseInsensitiveMap<VenueMenu> = {
            let payload = self
                .fetcher
                .get_data(&self.config, Entity::Venues, &mut cache)
                .await?;
            payload_to_table(Entity::Venues, payload, key)?
        };

        Ok(SourceData {
            participants,
            venues,
        })
    }

    async fn transform(&self, data: SourceData) -> Result<Report> {
        let selected = select_subset(&self.participants, &data.participants);
        if selected.is_empty() {
            tracing::warn!("None of the requested participants are known users");
        }
        tracing::debug!(
            "Selected {} of {} users",
            selected.len(),
            data.participants.len()
        );

        let preferences = aggregate_preferences(&selected);
        Ok(recommend(&data.venues, &preferences))
    }

    async fn load(&self, report: Report) -> Result<String> {
        let rendered = render_report(&report)?;

        if let Some(output_path) = self.config.output_path() {
            self.storage
                .write_file(REPORT_FILE, rendered.as_bytes())
                .await?;
            tracing::info!("📁 Report saved to: {}/{}", output_path, REPORT_FILE);
        }

        Ok(rendered)
    }
}
