pub mod pipeline;
pub mod runner;

pub use crate::domain::model::{Report, SourceData};
pub use crate::domain::ports::{ConfigProvider, Entity, Pipeline, Storage};
pub use crate::utils::error::Result;
