pub mod analytics;
pub mod config_service;
pub mod http_store;
pub mod local_store;
pub mod memory_store;
pub mod paths;

pub use analytics::{NoopAnalyticsSink, TracingAnalyticsSink};
pub use http_store::HttpRemoteStore;
pub use local_store::FileLocalStore;
pub use memory_store::InMemoryRemoteStore;
pub use paths::ConciergePaths;
