use crate::domain::model::{Report, SourceData};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// The two reference datasets the recommendation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entity {
    Users,
    Venues,
}

impl Entity {
    pub const ALL: [Entity; 2] = [Entity::Users, Entity::Venues];

    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Venues => "venues",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// URL or local path the entity is loaded from.
    fn source(&self, entity: Entity) -> &str;
    /// Field holding the entity name inside each record.
    fn rearrange_key(&self) -> &str;
    /// Directory the report is written to, if any.
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceData>;
    async fn transform(&self, data: SourceData) -> Result<Report>;
    async fn load(&self, report: Report) -> Result<String>;
}
