/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Directory holding the per-category snapshot files
    /// (`<dir>/<category>/guess.json`).
    pub snapshot_dir: std::path::PathBuf,
    /// Staleness window for cached snapshots, in seconds (default: `300`).
    pub snapshot_ttl_secs: u64,
    /// Canonical site origin, used for sitemap URLs.
    pub site_origin: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `SNAPSHOT_DIR`         | `./public/data`            |
    /// | `SNAPSHOT_TTL_SECS`    | `300`                      |
    /// | `SITE_ORIGIN`          | `https://unitconver.com`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let snapshot_dir = std::env::var("SNAPSHOT_DIR")
            .unwrap_or_else(|_| "./public/data".into())
            .into();

        let snapshot_ttl_secs: u64 = std::env::var("SNAPSHOT_TTL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("SNAPSHOT_TTL_SECS must be a valid u64");

        let site_origin =
            std::env::var("SITE_ORIGIN").unwrap_or_else(|_| "https://unitconver.com".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            snapshot_dir,
            snapshot_ttl_secs,
            site_origin,
        }
    }
}
