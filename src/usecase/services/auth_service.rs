use std::sync::Arc;

use crate::domain::entities::session::LoginCredentials;
use crate::usecase::ports::gateway::{ApiGateway, SourceError};
use crate::usecase::ports::session::{SessionStore, StoreError};

pub struct AuthService {
    gateway: Arc<dyn ApiGateway>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn ApiGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { gateway, session }
    }

    pub fn login(
        &self,
        credentials: &LoginCredentials,
        persistent: bool,
    ) -> Result<String, SourceError> {
        let token = self.gateway.login(credentials)?;
        self.session
            .save_token(&token, persistent)
            .map_err(|err| SourceError::Api(err.to_string()))?;
        tracing::debug!(persistent, "login succeeded, token stored");
        Ok(token)
    }

    pub fn logout(&self) -> Result<(), StoreError> {
        tracing::debug!("clearing stored token");
        self.session.clear_token()
    }

    pub fn current_token(&self) -> Option<String> {
        self.session.token()
    }
}
