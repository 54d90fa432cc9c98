use scraper::{Html, Selector};

use crate::models::OgTags;

/// Prefix every OpenGraph property shares. Compared case-sensitively.
pub const OG_PREFIX: &str = "og:";

/// Scan `html` for OpenGraph `<meta>` declarations.
///
/// Parsing is lenient: html5ever always yields a tree, so malformed markup
/// degrades to fewer (or no) fields rather than an error. When a property
/// appears more than once, the last one in document order wins.
pub fn extract_og_data(html: &str) -> OgTags {
    let document = Html::parse_document(html);
    let mut tags = OgTags::default();

    let Ok(selector) = Selector::parse("meta") else {
        return tags;
    };

    for el in document.select(&selector) {
        let property = el.value().attr("property").unwrap_or("");
        let content = el.value().attr("content").unwrap_or("");

        if !property.starts_with(OG_PREFIX) {
            continue;
        }

        match property {
            "og:title" => tags.title = Some(content.to_string()),
            "og:description" => tags.summary = Some(content.to_string()),
            "og:image" => tags.image_url = Some(content.to_string()),
            _ => {}
        }
    }

    tags
}
