use serde::{Deserialize, Serialize};

/// Wire format of an OMDb `?t=` title lookup.
///
/// OMDb answers 200 OK even for misses: `Response` is the string `"True"`
/// or `"False"`, and on a miss only `Error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbTitleResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
}

impl OmdbTitleResponse {
    pub fn is_found(&self) -> bool {
        self.response == "True"
    }
}
