#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the job-search REST endpoint.
    pub api_url: String,
    /// Base URL of the address geocoding service.
    pub geocoder_url: String,
    pub page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
