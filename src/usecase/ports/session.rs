use crate::domain::entities::session::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Message(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Explicit session/settings store replacing the ambient browser-storage
/// reads of the original dashboard. `init` must run once at process start
/// before any read or write.
pub trait SessionStore: Send + Sync {
    fn init(&self) -> Result<(), StoreError>;

    /// A persistent token takes precedence over a session-scoped one.
    fn token(&self) -> Option<String>;

    /// `persistent` keeps the token across restarts; a session token lives
    /// only as long as the store. Each mode clears the other.
    fn save_token(&self, token: &str, persistent: bool) -> Result<(), StoreError>;
    fn clear_token(&self) -> Result<(), StoreError>;

    /// Falls back to dark when nothing valid is stored.
    fn theme(&self) -> Theme;
    fn save_theme(&self, theme: Theme) -> Result<(), StoreError>;
}
