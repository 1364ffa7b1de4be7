use super::dto::OmdbTitleResponse;
use crate::modules::provider::domain::MovieCandidate;
use crate::shared::errors::{AppError, AppResult};

pub struct OmdbMapper;

impl OmdbMapper {
    /// Convert a found OMDb response into a candidate. Fails when the body
    /// claims success but is missing the fields a candidate cannot exist
    /// without.
    pub fn to_candidate(dto: OmdbTitleResponse) -> AppResult<MovieCandidate> {
        let title = dto
            .title
            .ok_or_else(|| AppError::ApiError("OMDb response missing Title".to_string()))?;
        let imdb_id = dto
            .imdb_id
            .ok_or_else(|| AppError::ApiError("OMDb response missing imdbID".to_string()))?;

        Ok(MovieCandidate {
            title,
            year: Self::normalize(dto.year),
            imdb_id,
            poster: Self::normalize(dto.poster),
            plot: Self::normalize(dto.plot),
            rating: Self::normalize(dto.rated),
        })
    }

    // OMDb sends the literal string "N/A" for absent fields.
    fn normalize(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty() && v != "N/A")
    }
}
