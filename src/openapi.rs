use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::FUNCTION_KEY_PARAM;
use crate::handlers;
use crate::models::OgRecord;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::url_summary::get_url_summary),
    components(schemas(OgRecord)),
    modifiers(&FunctionKeyScheme),
    tags((name = "BaseURL", description = "OpenGraph summaries of web pages"))
)]
pub struct ApiDoc;

struct FunctionKeyScheme;

impl Modify for FunctionKeyScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "function_key",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new(FUNCTION_KEY_PARAM))),
        );
    }
}
