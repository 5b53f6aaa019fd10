//! Top-level HTTP application.
//!
//! Mounts the activity API, the root redirect, and the static front-end, then
//! wraps everything in the shared middleware stack.

use axum::http::{HeaderValue, Method};
use axum::response::Redirect;
use axum::routing::{get, MethodRouter};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig, STATIC_MOUNT};

use super::activity::{activity_routes, ActivityAppState};

/// Build the complete application router.
///
/// # Routes
///
/// - `GET /` - 307 redirect to the static index page
/// - `GET /activities`, `POST /activities/:name/{signup,unregister}`
/// - `GET /static/*` - files from `static_files.dir`
pub fn app_router(state: ActivityAppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/", root_redirect(config.static_files.index_url()))
        .merge(activity_routes())
        .nest_service(STATIC_MOUNT, ServeDir::new(&config.static_files.dir))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// `GET /` answers with a 307 to `target`.
fn root_redirect<S>(target: String) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || {
        let target = target.clone();
        async move { Redirect::temporary(&target) }
    })
}

/// CORS policy: the configured allow-list, or permissive outside production
/// when none is configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
    }

    if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}
