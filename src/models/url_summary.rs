use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// OpenGraph fields pulled out of a page.
///
/// Each field is `None` until a matching `og:` property is seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OgTags {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub summary: Option<String>,
}

/// OpenGraph summary returned by `GET /api/URLSummary`.
///
/// `BaseURL` echoes the caller's input verbatim. The other fields are `null`
/// when the page did not declare them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = OGRecord)]
pub struct OgRecord {
    #[serde(rename = "BaseURL")]
    pub base_url: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,
    #[serde(rename = "Summary")]
    pub summary: Option<String>,
}

impl OgRecord {
    pub fn new(base_url: impl Into<String>, tags: OgTags) -> Self {
        OgRecord {
            base_url: base_url.into(),
            title: tags.title,
            image_url: tags.image_url,
            summary: tags.summary,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UrlSummaryQuery {
    /// The URL to analyse
    #[serde(rename = "BaseURL")]
    pub base_url: Option<String>,
}

/// JSON body accepted as a fallback when the query parameter is absent.
#[derive(Debug, Default, Deserialize)]
pub struct UrlSummaryBody {
    #[serde(rename = "BaseURL")]
    pub base_url: Option<String>,
}

impl UrlSummaryBody {
    /// Parse a raw request body, treating anything unparseable as empty.
    pub fn from_bytes(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
