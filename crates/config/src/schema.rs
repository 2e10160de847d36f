/// Config schema types (server, messenger, catalog).
use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BacbotConfig {
    pub server: ServerConfig,
    pub messenger: MessengerConfig,
    pub catalog: CatalogConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "0.0.0.0" since the platform must
    /// reach the webhook from outside.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

/// Messenger platform (Graph API) configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessengerConfig {
    /// Token echoed back during the webhook verification handshake.
    #[serde(serialize_with = "serialize_secret")]
    pub verify_token: Secret<String>,

    /// Page access token used to call the Send API.
    #[serde(serialize_with = "serialize_secret")]
    pub page_access_token: Secret<String>,

    /// Graph API base URL.
    pub graph_api_url: String,

    /// Graph API version segment (e.g. `v12.0`).
    pub graph_api_version: String,

    /// Timeout for a single outbound send, in seconds.
    pub send_timeout_secs: u64,
}

impl MessengerConfig {
    /// Full URL of the Send API endpoint, without the access token.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/me/messages",
            self.graph_api_url.trim_end_matches('/'),
            self.graph_api_version.trim_matches('/')
        )
    }
}

impl std::fmt::Debug for MessengerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessengerConfig")
            .field("verify_token", &"[REDACTED]")
            .field("page_access_token", &"[REDACTED]")
            .field("graph_api_url", &self.graph_api_url)
            .field("graph_api_version", &self.graph_api_version)
            .field("send_timeout_secs", &self.send_timeout_secs)
            .finish()
    }
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            verify_token: Secret::new(String::new()),
            page_access_token: Secret::new(String::new()),
            graph_api_url: "https://graph.facebook.com".into(),
            graph_api_version: "v12.0".into(),
            send_timeout_secs: 10,
        }
    }
}

/// Course catalog backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the backend serving the course list.
    pub base_url: String,
    /// Path of the read endpoint, appended to `base_url`.
    pub courses_path: String,
    /// Timeout for a single catalog fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl CatalogConfig {
    pub fn courses_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.courses_path.trim_start_matches('/')
        )
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            courses_path: "/api/courses/".into(),
            fetch_timeout_secs: 10,
        }
    }
}

fn serialize_secret<S: serde::Serializer>(
    secret: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
