use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub google_maps_api_key: Option<String>,
    pub geocoder_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Overrides the dataset compiled into the binary when set.
    pub data_path: Option<PathBuf>,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("geocoder_url", &self.geocoder_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("data_path", &self.data_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
