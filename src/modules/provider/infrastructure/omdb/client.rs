use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::dto::OmdbTitleResponse;
use super::mapper::OmdbMapper;
use crate::modules::provider::domain::{MetadataProvider, MovieCandidate};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

const OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new() -> AppResult<Self> {
        let api_key = std::env::var("OMDB_API_KEY").map_err(|_| {
            AppError::InvalidInput("OMDB_API_KEY environment variable not found".to_string())
        })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .user_agent("CineLog/1.0")
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: OMDB_BASE_URL.to_string(),
            api_key,
        })
    }

    pub async fn lookup_title(&self, title: &str) -> AppResult<Option<MovieCandidate>> {
        Validator::validate_search_title(title)?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await
            .map_err(AppError::from)?;

        self.handle_response_status(response.status())?;

        let text = response.text().await.map_err(AppError::from)?;
        let body: OmdbTitleResponse = serde_json::from_str(&text)?;

        if !body.is_found() {
            log::debug!(
                "OMDb returned no match for '{}': {}",
                title,
                body.error.as_deref().unwrap_or("no reason given")
            );
            return Ok(None);
        }

        OmdbMapper::to_candidate(body).map(Some)
    }

    fn handle_response_status(&self, status: StatusCode) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::UNAUTHORIZED => Err(AppError::ExternalServiceError(
                "OMDb rejected the API key".to_string(),
            )),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => Err(
                AppError::ExternalServiceError("OMDb service unavailable".to_string()),
            ),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code: {}",
                status
            ))),
        }
    }
}

#[async_trait]
impl MetadataProvider for OmdbClient {
    async fn lookup(&self, title: &str) -> AppResult<Option<MovieCandidate>> {
        self.lookup_title(title).await
    }
}
