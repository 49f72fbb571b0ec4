//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all resource handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, headers)
//! - Bind server to listener
//! - Graceful shutdown on signal or coordinator trigger

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api;
use crate::config::AppConfig;
use crate::http::request::{request_id_of, UuidRequestId, X_REQUEST_ID};
use crate::observability::metrics::{render_metrics, track_metrics};
use crate::security::headers::security_headers;
use crate::store::{DocumentStore, StoreHolder, StoreResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreHolder>,
    pub config: Arc<AppConfig>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<StoreHolder>) -> Self {
        Self {
            store,
            config: Arc::new(config),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// The live store handle; fails until the holder is initialized.
    pub fn store(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        self.store.get()
    }
}

/// HTTP server for the catalog API.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server around prepared application state.
    pub fn new(state: AppState) -> Self {
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let config = Arc::clone(&state.config);

        let mut router = api::routes(state.clone());
        if state.metrics.is_some() {
            router = router
                .route("/metrics", get(render_metrics))
                .route_layer(middleware::from_fn(track_metrics));
        }

        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                request_id = %request_id_of(request),
                method = %request.method(),
                path = %request.uri().path(),
            )
        });

        let router = router.with_state(state).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(trace)
                .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(config.server.request_timeout_secs),
                ))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        );

        if config.security.enable_headers {
            router.layer(security_headers())
        } else {
            router
        }
    }

    /// The assembled router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            auth_enabled = self.state.config.auth.enabled,
            docs = %self.state.config.docs.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
