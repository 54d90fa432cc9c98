use crate::error::SummaryResult;
use crate::extractor::extract_og_data;
use crate::fetcher::Fetcher;
use crate::models::OgRecord;

/// Fetch `url` and build its OpenGraph record.
///
/// `base_url` in the result is exactly `url`, untouched.
pub async fn get_og_metadata(fetcher: &Fetcher, url: &str) -> SummaryResult<OgRecord> {
    let html = fetcher.fetch(url).await?;
    Ok(OgRecord::new(url, extract_og_data(&html)))
}
