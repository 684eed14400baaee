use utoipa::OpenApi;

/// OpenAPI document for the service
///
/// Generated at compile time from the handler annotations in `server` and
/// served at `GET /openapi.json`. Version comes from the crate version.
///
/// # Tags
/// 1. **Time Zone Conversion**: Endpoints for converting times between global time zones
/// 2. **Utility**: Health check and utility endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::health_check,
        crate::server::list_timezones,
        crate::server::convert_time,
    ),
    components(
        schemas(
            crate::domain::models::ConversionRequest,
            crate::domain::models::ConversionResponse,
            crate::domain::models::TimezoneList,
            crate::domain::models::HealthResponse,
            crate::domain::models::ErrorResponse,
        )
    ),
    tags(
        (name = "Time Zone Conversion", description = "Endpoints for converting times between global time zones."),
        (name = "Utility", description = "Health check and utility endpoints")
    ),
    info(
        title = "Timezone Converter API",
        description = "REST API for converting times between different global time zones.",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Timezone Converter API");
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
        assert!(doc.paths.paths.contains_key("/convert-time"));
        assert!(doc.paths.paths.contains_key("/timezones"));
        assert!(doc.paths.paths.contains_key("/"));
    }
}
