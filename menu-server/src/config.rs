//! Server configuration, sourced from the environment

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the session database and log files
    pub work_dir: String,
    pub http_port: u16,
    /// Base URL of the remote settings API
    pub settings_api_url: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            settings_api_url: std::env::var("SETTINGS_API_URL")
                .unwrap_or_else(|_| "http://localhost:4000".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
