use std::path::{Path, PathBuf};

use {
    secrecy::Secret,
    tracing::{debug, warn},
};

use crate::{env_subst::substitute_env, schema::BacbotConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["bacbot.toml", "bacbot.yaml", "bacbot.yml", "bacbot.json"];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<BacbotConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./bacbot.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/bacbot/bacbot.{toml,yaml,yml,json}` (user-global)
///
/// Returns `BacbotConfig::default()` if no config file is found or the
/// file fails to parse.
pub fn discover_and_load() -> BacbotConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    BacbotConfig::default()
}

fn find_config_file() -> Option<PathBuf> {
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    let dir = config_dir()?;
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

/// Returns the user-global config directory (`~/.config/bacbot/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "bacbot").map(|d| d.config_dir().to_path_buf())
}

/// Apply the deployment environment variables on top of a loaded config.
///
/// `PORT`, `BIND`, `VERIFY_TOKEN`, `PAGE_ACCESS_TOKEN` and `BACKEND_API_URL`
/// take precedence over file values when set and non-empty.
pub fn apply_env_overrides(config: BacbotConfig) -> BacbotConfig {
    apply_env_overrides_with(config, |name| std::env::var(name).ok())
}

fn apply_env_overrides_with(
    mut config: BacbotConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> BacbotConfig {
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(port) = lookup("PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(e) => warn!(value = %port, error = %e, "ignoring invalid PORT"),
        }
    }
    if let Some(bind) = lookup("BIND") {
        config.server.bind = bind;
    }
    if let Some(token) = lookup("VERIFY_TOKEN") {
        config.messenger.verify_token = Secret::new(token);
    }
    if let Some(token) = lookup("PAGE_ACCESS_TOKEN") {
        config.messenger.page_access_token = Secret::new(token);
    }
    if let Some(url) = lookup("BACKEND_API_URL") {
        config.catalog.base_url = url;
    }
    config
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<BacbotConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}
