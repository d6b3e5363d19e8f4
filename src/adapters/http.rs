use crate::domain::ports::{ConfigProvider, Entity};
use crate::domain::services::lookup::CaseInsensitiveMap;
use crate::utils::error::{RecommendError, Result};
use crate::utils::validation::is_remote;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Raw payloads already fetched during this run, keyed by entity.
///
/// Owned by the caller and passed in explicitly.
#[derive(Debug, Clone, Default)]
pub struct PayloadCache {
    payloads: HashMap<Entity, Value>,
}

impl PayloadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entity: Entity) -> Option<&Value> {
        self.payloads.get(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.payloads.contains_key(&entity)
    }

    pub fn insert(&mut self, entity: Entity, payload: Value) {
        self.payloads.insert(entity, payload);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    client: Client,
}

impl SourceFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload for `entity`, fetching every configured source on
    /// the first miss.
    pub async fn get_data<'c, C: ConfigProvider>(
        &self,
        config: &C,
        entity: Entity,
        cache: &'c mut PayloadCache,
    ) -> Result<&'c Value> {
        if !cache.contains(entity) {
            self.fetch_all(config, cache).await?;
        } else {
            tracing::debug!("Serving `{}` from cache", entity);
        }

        cache.get(entity).ok_or_else(|| RecommendError::UnavailableData {
            entity: entity.to_string(),
        })
    }

    /// Fetches every entity. A source answering with a non-success status is
    /// logged and skipped.
    pub async fn fetch_all<C: ConfigProvider>(
        &self,
        config: &C,
        cache: &mut PayloadCache,
    ) -> Result<()> {
        for entity in Entity::ALL {
            if let Some(payload) = self.fetch_one(config.source(entity), entity).await? {
                cache.insert(entity, payload);
            }
        }
        Ok(())
    }

    async fn fetch_one(&self, source: &str, entity: Entity) -> Result<Option<Value>> {
        if !is_remote(source) {
            tracing::info!("Reading `{}` data from {}", entity, source);
            let bytes = tokio::fs::read(source).await?;
            return Ok(Some(serde_json::from_slice(&bytes)?));
        }

        tracing::info!("Getting `{}` data from the following url: {}", entity, source);
        let response = self.client.get(source).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let err = RecommendError::HttpStatusError {
                entity: entity.to_string(),
                url: source.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            tracing::error!("{}. Skipping `{}`", err, entity);
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}

fn unsupported(entity: Entity, message: impl Into<String>) -> RecommendError {
    RecommendError::UnsupportedShape {
        entity: entity.to_string(),
        message: message.into(),
    }
}

/// Re-keys an array of records on `rearrange_key`.
///
/// Each object's `rearrange_key` value becomes the table key and the rest of
/// its fields are deserialized into `T`. Objects without the key are skipped.
pub fn payload_to_table<T: DeserializeOwned>(
    entity: Entity,
    payload: &Value,
    rearrange_key: &str,
) -> Result<CaseInsensitiveMap<T>> {
    let items = payload
        .as_array()
        .ok_or_else(|| unsupported(entity, "expected a JSON array of records"))?;

    let mut table = CaseInsensitiveMap::new();
    for (idx, item) in items.iter().enumerate() {
        let object = item
            .as_object()
            .ok_or_else(|| unsupported(entity, format!("record {} is not an object", idx)))?;

        let Some(name) = object.get(rearrange_key) else {
            tracing::debug!("Skipping `{}` record {} without `{}`", entity, idx, rearrange_key);
            continue;
        };
        let name = name.as_str().ok_or_else(|| {
            unsupported(entity, format!("`{}` of record {} is not a string", rearrange_key, idx))
        })?;

        let fields: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| key.as_str() != rearrange_key)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let record: T = serde_json::from_value(Value::Object(fields))
            .map_err(|e| unsupported(entity, format!("record `{}`: {}", name, e)))?;

        table.insert(name, record);
    }

    tracing::info!("Loaded {} `{}` records", table.len(), entity);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ParticipantPreferences, VenueMenu};
    use httpmock::prelude::*;
    use std::io::Write;

    struct MockConfig {
        users: String,
        venues: String,
    }

    impl ConfigProvider for MockConfig {
        fn source(&self, entity: Entity) -> &str {
            match entity {
                Entity::Users => &self.users,
                Entity::Venues => &self.venues,
            }
        }

        fn rearrange_key(&self) -> &str {
            "name"
        }

        fn output_path(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_payload_to_table_rekeys_on_name() {
        let payload = serde_json::json!([
            {"name": "Danielle Ren", "wont_eat": ["Fish"], "drinks": ["Cider", "Rum", "Soft drinks"]},
            {"name": "Tom Mullen", "wont_eat": ["Meat", "Fish"], "drinks": ["Soft drinks", "Tea"], "age": 40},
            {"wont_eat": ["Nameless"]}
        ]);

        let table: CaseInsensitiveMap<ParticipantPreferences> =
            payload_to_table(Entity::Users, &payload, "name").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("tom mullen").unwrap().drinks,
            Some(vec!["Soft drinks".to_string(), "Tea".to_string()])
        );
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Danielle Ren", "Tom Mullen"]);
    }

    #[test]
    fn test_payload_to_table_rejects_non_array() {
        let payload = serde_json::json!({"name": "El Cantina", "food": [], "drinks": []});

        let result = payload_to_table::<VenueMenu>(Entity::Venues, &payload, "name");

        assert!(matches!(result, Err(RecommendError::UnsupportedShape { .. })));
    }

    #[test]
    fn test_payload_to_table_rejects_bad_record_fields() {
        let payload = serde_json::json!([{"name": "El Cantina", "food": "Mexican", "drinks": []}]);

        let result = payload_to_table::<VenueMenu>(Entity::Venues, &payload, "name");

        assert!(matches!(result, Err(RecommendError::UnsupportedShape { .. })));
    }

    #[test]
    fn test_payload_to_table_rejects_non_string_name() {
        let payload = serde_json::json!([{"name": 7, "food": [], "drinks": []}]);

        let result = payload_to_table::<VenueMenu>(Entity::Venues, &payload, "name");

        assert!(matches!(result, Err(RecommendError::UnsupportedShape { .. })));
    }

    #[tokio::test]
    async fn test_get_data_fetches_each_source_once() {
        let server = MockServer::start();
        let users_mock = server.mock(|when, then| {
            when.method(GET).path("/users.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"name": "Wen Li", "wont_eat": [], "drinks": []}]));
        });
        let venues_mock = server.mock(|when, then| {
            when.method(GET).path("/venues.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"name": "Fabrique", "food": [], "drinks": []}]));
        });

        let config = MockConfig {
            users: server.url("/users.json"),
            venues: server.url("/venues.json"),
        };
        let fetcher = SourceFetcher::new();
        let mut cache = PayloadCache::new();

        let users = fetcher
            .get_data(&config, Entity::Users, &mut cache)
            .await
            .unwrap()
            .clone();
        let venues = fetcher
            .get_data(&config, Entity::Venues, &mut cache)
            .await
            .unwrap()
            .clone();

        users_mock.assert_hits(1);
        venues_mock.assert_hits(1);
        assert!(cache.contains(Entity::Users) && cache.contains(Entity::Venues));
        assert_eq!(users[0]["name"], "Wen Li");
        assert_eq!(venues[0]["name"], "Fabrique");
    }

    #[tokio::test]
    async fn test_failed_source_is_skipped() {
        let server = MockServer::start();
        let users_mock = server.mock(|when, then| {
            when.method(GET).path("/users.json");
            then.status(404);
        });
        let venues_mock = server.mock(|when, then| {
            when.method(GET).path("/venues.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let config = MockConfig {
            users: server.url("/users.json"),
            venues: server.url("/venues.json"),
        };
        let fetcher = SourceFetcher::new();
        let mut cache = PayloadCache::new();

        let result = fetcher.get_data(&config, Entity::Users, &mut cache).await;

        users_mock.assert();
        venues_mock.assert();
        assert!(matches!(result, Err(RecommendError::UnavailableData { .. })));
        assert!(cache.contains(Entity::Venues));
    }

    #[tokio::test]
    async fn test_local_file_source() {
        let mut users = tempfile::NamedTempFile::new().unwrap();
        users
            .write_all(br#"[{"name": "Tom Mullen", "wont_eat": ["Meat"], "drinks": ["Tea"]}]"#)
            .unwrap();
        let mut venues = tempfile::NamedTempFile::new().unwrap();
        venues
            .write_all(br#"[{"name": "Fabrique", "food": ["Bread"], "drinks": ["Tea"]}]"#)
            .unwrap();

        let config = MockConfig {
            users: users.path().to_str().unwrap().to_string(),
            venues: venues.path().to_str().unwrap().to_string(),
        };
        let fetcher = SourceFetcher::new();
        let mut cache = PayloadCache::new();

        let payload = fetcher
            .get_data(&config, Entity::Venues, &mut cache)
            .await
            .unwrap();

        assert_eq!(payload[0]["food"][0], "Bread");
        assert!(cache.contains(Entity::Users) && cache.contains(Entity::Venues));
    }
}
