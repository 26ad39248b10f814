use crate::services::query::BoundsPolicy;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_LOG_FILTER: &str = "catalog_service=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: String,
    pub pagination: BoundsPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            pagination: BoundsPolicy::Strict,
        }
    }
}

impl ServiceConfig {
    /// Reads `HOST`, `PORT` and `PAGINATION_BOUNDS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let pagination = match lookup("PAGINATION_BOUNDS") {
            Some(value) => BoundsPolicy::parse(&value).unwrap_or_else(|| {
                warn!("Unknown PAGINATION_BOUNDS {:?}, using strict", value);
                BoundsPolicy::Strict
            }),
            None => defaults.pagination,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT").unwrap_or(defaults.port),
            pagination,
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
