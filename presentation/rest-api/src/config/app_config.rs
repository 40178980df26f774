use super::{cors_config, credentials_config, server_config::ServerConfig, session_config};
use chrono::Duration;
use memory::credentials::DemoCredential;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub credentials: Vec<DemoCredential>,
    pub session_idle_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            credentials: credentials_config::load_credentials(),
            session_idle_ttl: session_config::load_idle_ttl(),
        }
    }
}
