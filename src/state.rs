use std::sync::Arc;

use crate::fetcher::Fetcher;

/// Shared application state passed to all handlers and extractors.
/// Holds no mutable data, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
    pub function_key: Option<Arc<str>>,
}
