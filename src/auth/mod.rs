use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    RequestPartsExt,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::state::AppState;

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";
pub const FUNCTION_KEY_PARAM: &str = "code";

#[derive(Deserialize)]
struct KeyQuery {
    code: Option<String>,
}

/// Compare keys by SHA-256 digest so the timing of the comparison does not
/// depend on how long a prefix of the secret the caller guessed.
pub fn keys_match(presented: &str, expected: &str) -> bool {
    Sha256::digest(presented.as_bytes()) == Sha256::digest(expected.as_bytes())
}

/// Gate for the function key. A no-op when `AppState::function_key` is unset.
pub struct FunctionKey;

#[async_trait]
impl FromRequestParts<AppState> for FunctionKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.function_key.as_deref() else {
            return Ok(FunctionKey);
        };

        let from_header = parts
            .headers
            .get(FUNCTION_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let presented = match from_header {
            Some(key) => Some(key),
            None => parts
                .extract::<Query<KeyQuery>>()
                .await
                .ok()
                .and_then(|Query(q)| q.code),
        };

        match presented {
            Some(key) if keys_match(&key, expected) => Ok(FunctionKey),
            Some(_) => {
                tracing::debug!("Rejected request with wrong function key");
                Err(AppError::Auth("Invalid function key".into()))
            }
            None => Err(AppError::Auth("Missing function key".into())),
        }
    }
}
