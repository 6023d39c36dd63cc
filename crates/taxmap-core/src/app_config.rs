/// Application configuration, loaded once at startup.
///
/// Both API keys are required; everything else has a default. Base URLs are
/// overridable so tests and self-hosted proxies can redirect the clients.
#[derive(Clone)]
pub struct AppConfig {
    pub geocoder_api_key: String,
    pub salestax_api_key: String,
    pub geocoder_base_url: String,
    pub salestax_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("geocoder_api_key", &"[redacted]")
            .field("salestax_api_key", &"[redacted]")
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field("salestax_base_url", &self.salestax_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
