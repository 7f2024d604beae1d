use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::entities::session::LoginCredentials;
use crate::infra::config::EnvConfig;
use crate::usecase::ports::gateway::{ApiGateway, DashboardApiData, SourceError};

/// Response envelope shared by the auth and dashboard endpoints.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    result: bool,
    data: Option<T>,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
    message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn into_data(self, fallback_error: &str) -> Result<T, SourceError> {
        if !self.result {
            let message = self
                .error_message
                .or(self.message)
                .unwrap_or_else(|| fallback_error.to_string());
            return Err(SourceError::Api(message));
        }

        self.data
            .ok_or_else(|| SourceError::Api(fallback_error.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct AuthData {
    token: Option<String>,
}

pub struct HttpApiGateway {
    client: Client,
    auth_url: String,
    dashboard_url: String,
}

impl HttpApiGateway {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            client: Client::new(),
            auth_url: config.auth_api_url.clone(),
            dashboard_url: config.dashboard_api_url.clone(),
        }
    }
}

impl ApiGateway for HttpApiGateway {
    fn login(&self, credentials: &LoginCredentials) -> Result<String, SourceError> {
        tracing::debug!(url = %self.auth_url, "requesting auth token");

        let envelope: ApiEnvelope<AuthData> = self
            .client
            .post(&self.auth_url)
            .json(credentials)
            .send()
            .map_err(|err| SourceError::Network(err.to_string()))?
            .json()
            .map_err(|err| SourceError::Network(err.to_string()))?;

        let data = envelope.into_data("Авторизация не удалась")?;
        data.token
            .filter(|token| !token.is_empty())
            .ok_or(SourceError::MissingToken)
    }

    fn fetch_dashboard(&self, token: &str) -> Result<DashboardApiData, SourceError> {
        tracing::debug!(url = %self.dashboard_url, "loading dashboard data");

        let envelope: ApiEnvelope<DashboardApiData> = self
            .client
            .get(&self.dashboard_url)
            .bearer_auth(token)
            .send()
            .map_err(|err| SourceError::Network(err.to_string()))?
            .json()
            .map_err(|err| SourceError::Network(err.to_string()))?;

        envelope.into_data("Не удалось загрузить данные")
    }
}
