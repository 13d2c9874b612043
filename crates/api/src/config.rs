/// Which record store backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory store; records do not survive a restart. Default for local
    /// development.
    Memory,
    /// NetSuite RESTlet backend; requires the `NETSUITE_*` variables.
    Netsuite,
}

/// Connection settings for the NetSuite RESTlet backend.
#[derive(Debug, Clone)]
pub struct NetsuiteConfig {
    /// REST root, production or sandbox.
    pub root: String,
    pub account: String,
    pub email: String,
    pub password: String,
    pub role: String,
    /// Script id of the companion RESTlet deployment.
    pub script: u32,
    pub deploy: u32,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against the
/// in-memory store. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Numeric id of the saved search backing the projects lookup.
    pub projects_search_id: u32,
    /// Store backend selection.
    pub store: StoreBackend,
    /// Present only when `store` is [`StoreBackend::Netsuite`].
    pub netsuite: Option<NetsuiteConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default     |
    /// |--------------------------|-------------|
    /// | `HOST`                   | `0.0.0.0`   |
    /// | `PORT`                   | `3000`      |
    /// | `CORS_ORIGINS`           | (none)      |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`        |
    /// | `PROJECTS_SEARCH_ID`     | `6546`      |
    /// | `STORE_BACKEND`          | `memory`    |
    ///
    /// With `STORE_BACKEND=netsuite`, the following are required:
    /// `NETSUITE_ACCOUNT`, `NETSUITE_EMAIL`, `NETSUITE_PASSWORD`,
    /// `NETSUITE_ROLE`, `NETSUITE_SCRIPT`; optional: `NETSUITE_ROOT`
    /// (defaults to the production root), `NETSUITE_DEPLOY` (defaults `1`).
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let projects_search_id: u32 = std::env::var("PROJECTS_SEARCH_ID")
            .unwrap_or_else(|_| "6546".into())
            .parse()
            .expect("PROJECTS_SEARCH_ID must be a valid u32");

        let store = match std::env::var("STORE_BACKEND").as_deref() {
            Ok("netsuite") => StoreBackend::Netsuite,
            Ok("memory") | Err(_) => StoreBackend::Memory,
            Ok(other) => panic!("STORE_BACKEND must be 'memory' or 'netsuite', got '{other}'"),
        };

        let netsuite = (store == StoreBackend::Netsuite).then(|| NetsuiteConfig {
            root: std::env::var("NETSUITE_ROOT")
                .unwrap_or_else(|_| suitebridge_store::netsuite::PRODUCTION_ROOT.into()),
            account: require("NETSUITE_ACCOUNT"),
            email: require("NETSUITE_EMAIL"),
            password: require("NETSUITE_PASSWORD"),
            role: require("NETSUITE_ROLE"),
            script: require("NETSUITE_SCRIPT")
                .parse()
                .expect("NETSUITE_SCRIPT must be a valid u32"),
            deploy: std::env::var("NETSUITE_DEPLOY")
                .unwrap_or_else(|_| "1".into())
                .parse()
                .expect("NETSUITE_DEPLOY must be a valid u32"),
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            projects_search_id,
            store,
            netsuite,
        }
    }
}

fn require(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set for the netsuite backend"))
}
