pub mod url_summary;

pub use url_summary::{OgRecord, OgTags, UrlSummaryBody, UrlSummaryQuery};
