use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::session::Theme;
use crate::usecase::ports::session::{SessionStore, StoreError};

const TOKEN_FILE: &str = "auth_token";
const THEME_FILE: &str = "theme";

/// File-backed session store. Persistent tokens live in a file under the
/// store directory; session tokens live only in memory and disappear with
/// the store, mirroring local vs. session browser storage.
pub struct FileSessionStore {
    dir: PathBuf,
    session_token: Mutex<Option<String>>,
}

impl FileSessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            session_token: Mutex::new(None),
        }
    }

    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "detectra")
            .context("failed to resolve application data directory")?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.dir.join(THEME_FILE)
    }

    fn set_session_token(&self, value: Option<String>) {
        if let Ok(mut guard) = self.session_token.lock() {
            *guard = value;
        }
    }
}

impl SessionStore for FileSessionStore {
    fn init(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            StoreError::Message(format!(
                "failed to create session directory {}: {err}",
                self.dir.display()
            ))
        })
    }

    fn token(&self) -> Option<String> {
        if let Ok(stored) = fs::read_to_string(self.token_path()) {
            let trimmed = stored.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }

        self.session_token.lock().ok().and_then(|guard| guard.clone())
    }

    fn save_token(&self, token: &str, persistent: bool) -> Result<(), StoreError> {
        if persistent {
            fs::write(self.token_path(), token)
                .map_err(|err| StoreError::Message(format!("failed to store token: {err}")))?;
            self.set_session_token(None);
            return Ok(());
        }

        self.set_session_token(Some(token.to_string()));
        remove_if_exists(&self.token_path())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.set_session_token(None);
        remove_if_exists(&self.token_path())
    }

    fn theme(&self) -> Theme {
        match fs::read_to_string(self.theme_path()) {
            Ok(stored) => stored.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("stored theme is not recognized, falling back to dark");
                Theme::Dark
            }),
            Err(_) => Theme::Dark,
        }
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        fs::write(self.theme_path(), theme.as_str())
            .map_err(|err| StoreError::Message(format!("failed to store theme: {err}")))
    }
}

fn remove_if_exists(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(StoreError::Message(format!(
            "failed to remove {}: {err}",
            path.display()
        ))),
    }
}
