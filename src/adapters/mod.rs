// Adapters layer: implementations that talk to the outside world.

pub mod http;

pub use http::{payload_to_table, PayloadCache, SourceFetcher};
