//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with both routes
//! - Wire up middleware (tracing, security headers)
//! - Dispatch `POST /api/contact` to the contact handler
//! - Dispatch everything else to the static site, GET/HEAD only
//! - Serve until the shutdown signal fires

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::contact::handler::submit_inquiry;
use crate::contact::store::InquiryStore;
use crate::security::headers;
use crate::security::rate_limit::RateLimiter;
use crate::site::resolver::StaticResolver;
use crate::site::serve;

/// Application state injected into handlers.
///
/// The limiter and store are constructed once per process and shared by
/// reference; neither is ambient global state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub limiter: Arc<RateLimiter>,
    pub store: Arc<InquiryStore>,
    pub resolver: Arc<StaticResolver>,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let limiter = Arc::new(RateLimiter::new(
            config.rate_limit.window_ms,
            config.rate_limit.max_requests,
        ));
        let store = Arc::new(InquiryStore::new(&config.contact.data_file));
        let resolver = Arc::new(StaticResolver::new(&config.content.public_dir));

        let state = AppState {
            config: Arc::new(config),
            limiter,
            store,
            resolver,
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let router = Router::new()
            .route("/api/contact", post(submit_inquiry))
            .fallback(static_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        headers::apply(router)
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback handler: the static site. Non-POST methods on unknown paths
/// land here too, so the method gate lives here rather than in a route.
async fn static_handler(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method();
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let is_head = method == Method::HEAD;
    serve::respond(
        &state.resolver,
        request.uri().path(),
        is_head,
        &state.config.content.not_found_page,
    )
    .await
}
