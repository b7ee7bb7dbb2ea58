use crate::config::Config;
use crate::kv::KeyValueStore;
use crate::s3::ObjectStore;
use std::sync::Arc;

/// Shared application state
///
/// Store handles are trait objects so tests can swap in fakes without a
/// live Redis or S3 behind them.
#[derive(Clone)]
pub struct AppState {
    pub kv: Arc<dyn KeyValueStore>,
    pub objects: Arc<dyn ObjectStore>,
    pub config: Arc<Config>,
}
