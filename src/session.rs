use crate::config::config_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Durable single-value store for the last successfully rendered query.
/// Injected into `App` so tests can substitute an in-memory fake.
pub trait LastQueryStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, query: &str);
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionState {
    last_search: Option<String>,
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        config_dir().join("octoview").join("session.toml")
    }
}

impl LastQueryStore for FileStore {
    fn get(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let state: SessionState = toml::from_str(&content).ok()?;
        state.last_search
    }

    // Write failures are swallowed: losing the remembered query must not
    // break the lookup that just succeeded.
    fn set(&mut self, query: &str) {
        let state = SessionState {
            last_search: Some(query.to_string()),
        };
        if let Ok(content) = toml::to_string_pretty(&state) {
            if let Some(parent) = self.path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = std::fs::write(&self.path, content);
        }
    }
}
