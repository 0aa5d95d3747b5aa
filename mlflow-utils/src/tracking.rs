use crosscutting::settings::environment;
use mockall::automock;
use std::sync::RwLock;

pub const TRACKING_URI_KEY: &str = "MLFLOW_TRACKING_URI";
pub const DEFAULT_TRACKING_URI: &str = "mlruns";

static TRACKING_URI: RwLock<Option<String>> = RwLock::new(None);

#[automock]
pub trait TrackingClient: Send + Sync {
    fn set_tracking_uri(&self, uri: &str);
}

/// Targets the process-wide tracking configuration.
pub struct GlobalTrackingClient;

impl TrackingClient for GlobalTrackingClient {
    fn set_tracking_uri(&self, uri: &str) {
        self::set_tracking_uri(uri);
    }
}

/// Points every tracking call in this process, and in child processes
/// through `MLFLOW_TRACKING_URI`, at `uri`.
pub fn set_tracking_uri(uri: &str) {
    let mut tracking_uri = TRACKING_URI.write().unwrap_or_else(|e| e.into_inner());
    *tracking_uri = Some(uri.to_string());
    environment::set_env_variable(TRACKING_URI_KEY, uri);
}

pub fn get_tracking_uri() -> String {
    let tracking_uri = TRACKING_URI.read().unwrap_or_else(|e| e.into_inner());
    tracking_uri
        .clone()
        .or_else(|| environment::get_env_variable(TRACKING_URI_KEY).ok())
        .unwrap_or(DEFAULT_TRACKING_URI.to_string())
}

pub fn is_tracking_uri_set() -> bool {
    let tracking_uri = TRACKING_URI.read().unwrap_or_else(|e| e.into_inner());
    tracking_uri.is_some() || environment::get_env_variable(TRACKING_URI_KEY).is_ok()
}

pub fn reset_tracking_uri() {
    let mut tracking_uri = TRACKING_URI.write().unwrap_or_else(|e| e.into_inner());
    *tracking_uri = None;
    environment::remove_env_variable(TRACKING_URI_KEY);
}
