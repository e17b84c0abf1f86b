use std::path::Path;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    adapters::{controllers::notice_controller::NoticeController, state::AppState},
    domain::config::server::ConfigError,
    services::local_storage::UPLOADS_ROUTE,
};

/// Allow-listed origins when configured, otherwise permissive.
pub fn cors_layer(allowed_origins: Option<&[String]>) -> Result<CorsLayer, ConfigError> {
    let Some(allowed_origins) = allowed_origins else {
        return Ok(CorsLayer::permissive());
    };

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CORS_ALLOWED_ORIGINS",
                    value: origin.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn build_router(app_state: AppState, upload_dir: &Path, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/notices",
            get(NoticeController::list_notices).post(NoticeController::create_notice),
        )
        .nest_service(UPLOADS_ROUTE, ServeDir::new(upload_dir))
        // Uploads are not size-limited.
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_cors_without_allow_list() {
        assert!(cors_layer(None).is_ok());
    }

    #[test]
    fn allow_list_origins_must_be_header_values() {
        let good = vec!["https://board.example.com".to_string()];
        assert!(cors_layer(Some(good.as_slice())).is_ok());

        let bad = vec!["https://bad\norigin".to_string()];
        assert!(matches!(
            cors_layer(Some(bad.as_slice())),
            Err(ConfigError::InvalidValue {
                key: "CORS_ALLOWED_ORIGINS",
                ..
            })
        ));
    }
}
