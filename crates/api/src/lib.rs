//! HTTP API server for the property management records.
//!
//! Exposes the seven record collections under `/api`, with structured
//! logging (tracing), Prometheus metrics and optional Basic authentication.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use domain::{CrudService, Validate};
use metrics_exporter_prometheus::PrometheusHandle;
use model::{Agent, Entity, Lease, MaintenanceRequest, Owner, Payment, Property, Tenant};
use store::{Repository, Store};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_http::validate_request::ValidateRequestHeaderLayer;

use config::Credentials;
use routes::records;

/// Shared application state accessible from all handlers.
pub struct AppState<S> {
    pub store: S,
}

impl<S: Store> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the CRUD service for one record type over the shared store.
    pub fn service<E>(&self) -> CrudService<S, E>
    where
        S: Repository<E>,
        E: Entity + Validate,
    {
        CrudService::new(self.store.clone())
    }
}

/// Creates the default application state over the given store.
pub fn create_default_state<S: Store>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}

/// Adds list/create and get/update/delete routes for one collection.
fn crud_routes<S, E>(router: Router<Arc<AppState<S>>>, collection: &str) -> Router<Arc<AppState<S>>>
where
    S: Store + Repository<E>,
    E: Entity + Validate,
{
    router
        .route(
            &format!("/api/{collection}"),
            get(records::list::<S, E>).post(records::create::<S, E>),
        )
        .route(
            &format!("/api/{collection}/{{id}}"),
            get(records::get::<S, E>)
                .put(records::update::<S, E>)
                .delete(records::delete::<S, E>),
        )
}

/// Creates the Axum application router with all routes and shared state.
///
/// When `credentials` is set, every `/api` route requires HTTP Basic
/// authentication; `/health` and `/metrics` stay open.
pub fn create_app<S: Store>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    credentials: Option<&Credentials>,
) -> Router {
    let mut api = Router::new();
    api = crud_routes::<S, Owner>(api, "owners");
    api = crud_routes::<S, Property>(api, "properties");
    api = crud_routes::<S, Tenant>(api, "tenants");
    api = crud_routes::<S, Agent>(api, "agents");
    api = crud_routes::<S, Lease>(api, "leases");
    api = crud_routes::<S, Payment>(api, "payments");
    api = crud_routes::<S, MaintenanceRequest>(api, "maintenance-requests");

    if let Some(credentials) = credentials {
        // The layer answers 401 with a `WWW-Authenticate: Basic` challenge.
        #[allow(deprecated)]
        let auth =
            ValidateRequestHeaderLayer::basic(&credentials.username, &credentials.password);
        api = api.route_layer(auth);
    }

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .merge(api.with_state(state))
        .merge(metrics_router)
        .method_not_allowed_fallback(error::method_not_allowed)
        .fallback(error::fallback)
        .layer(middleware::from_fn(error::fill_error_path))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
