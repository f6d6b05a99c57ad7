use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub user: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user: None,
        }
    }
}

impl Config {
    pub fn load(cli_user: Option<String>) -> Self {
        let config_file = config_dir().join("octoview").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("OCTOVIEW_"));

        if let Some(user) = cli_user {
            figment = figment.merge(Serialized::default("user", user));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_point_at_github() {
        std::env::remove_var("OCTOVIEW_API_URL");
        std::env::remove_var("OCTOVIEW_USER");
        let config = Config::load(None);
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.user, None);
    }

    #[test]
    #[serial]
    fn env_overrides_api_url() {
        std::env::set_var("OCTOVIEW_API_URL", "http://localhost:9999");
        let config = Config::load(None);
        assert_eq!(config.api_url, "http://localhost:9999");
        std::env::remove_var("OCTOVIEW_API_URL");
    }

    #[test]
    #[serial]
    fn cli_user_wins_over_env() {
        std::env::set_var("OCTOVIEW_USER", "env-user");
        let config = Config::load(Some("cli-user".to_string()));
        assert_eq!(config.user.as_deref(), Some("cli-user"));
        std::env::remove_var("OCTOVIEW_USER");
    }
}
